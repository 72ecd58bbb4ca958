//! Reusable template fixtures for CLI tests.

/// Shell template with every placeholder present
pub const START_SH: &str = "\
#!/usr/bin/env bash
# Start the service container

readonly CONTAINER_NAME=\"your-container-name\"
readonly IMAGE_NAME=\"your-image-name:latest\"
readonly DISPLAY_NAME=\"Your Service\"
readonly DOCKERFILE_PATH=\"./Dockerfile\"

docker start \"${CONTAINER_NAME}\"
";

pub const STOP_SH: &str = "\
#!/usr/bin/env bash
# Stop the service container

readonly CONTAINER_NAME=\"your-container-name\"

docker stop \"${CONTAINER_NAME}\"
";

pub const STATUS_SH: &str = "\
#!/usr/bin/env bash
# Show container status

readonly CONTAINER_NAME=\"your-container-name\"
readonly DISPLAY_NAME=\"Your Service\"

docker ps --filter \"name=${CONTAINER_NAME}\"
";

pub const LOGS_SH: &str = "\
#!/usr/bin/env bash
# Tail container logs

readonly CONTAINER_NAME=\"your-container-name\"

docker logs -f \"${CONTAINER_NAME}\"
";

pub const REBUILD_SH: &str = "\
#!/usr/bin/env bash
# Rebuild the container image

readonly CONTAINER_NAME=\"your-container-name\"
readonly IMAGE_NAME=\"your-image-name:latest\"
readonly DOCKERFILE_PATH=\"./Dockerfile\"

docker build -t \"${IMAGE_NAME}\" -f \"${DOCKERFILE_PATH}\" .
";

/// Python template; copied verbatim, never customized
pub const STATUS_PY: &str = "\
#!/usr/bin/env python3
\"\"\"Show container status\"\"\"

CONTAINER_NAME = 'your-container-name'

print(CONTAINER_NAME)
";

/// Shared theme include deployed as a support file
pub const THEME_SH: &str = "\
#!/usr/bin/env bash
# Shared color and icon definitions

readonly GREEN='\\033[0;32m'
readonly NC='\\033[0m'
";
