//! shipkit CLI - installer for customizable container helper scripts
//!
//! Usage: shipkit <COMMAND>
//!
//! Commands:
//!   list     Show the template registry with selection indices
//!   install  Install templates into a project

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use dialoguer::{Confirm, Input};
use is_terminal::IsTerminal;
use unicode_width::UnicodeWidthStr;

use shipkit::config::{Config, ConfigWarning};
use shipkit::customize::Bindings;
use shipkit::deploy::{
    deploy, DeployEvent, DeployOptions, DeployReport, DeployRequest, InteractiveResolver,
};
use shipkit::fs::{FileSystem, LocalFileSystem};
use shipkit::models::TemplateEntry;
use shipkit::ui::theme::colors;
use shipkit::ui::UiContext;
use shipkit::{registry, selector};

/// shipkit - installer for customizable container helper scripts
#[derive(Parser, Debug)]
#[command(name = "shipkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the template registry with selection indices
    List {
        /// Directory containing the template categories
        #[arg(short, long, default_value = ".")]
        source: PathBuf,
    },

    /// Install templates into a project
    Install(InstallOpts),
}

#[derive(Args, Debug)]
struct InstallOpts {
    /// Directory containing the template categories
    #[arg(short, long, default_value = ".")]
    source: PathBuf,

    /// Destination directory (prompted for when omitted)
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Value for the container name placeholder (required)
    #[arg(long)]
    container_name: Option<String>,

    /// Value for the image name placeholder
    #[arg(long)]
    image_name: Option<String>,

    /// Value for the display name placeholder
    #[arg(long)]
    display_name: Option<String>,

    /// Value for the Dockerfile path placeholder
    #[arg(long)]
    dockerfile: Option<String>,

    /// Selection expression: 1-based indices, "all", or "core"
    #[arg(long)]
    select: Option<String>,

    /// Strip inline comments from deployed shell scripts
    #[arg(long)]
    strip_comments: bool,

    /// Overwrite existing destination files without prompting
    #[arg(short, long)]
    force: bool,

    /// Accept defaults and skip confirmation prompts
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { source } => cmd_list(&source, cli.json, cli.verbose),
        Commands::Install(opts) => cmd_install(opts, cli.json, cli.verbose),
    }
}

fn cmd_list(source: &Path, json: bool, verbose: u8) -> Result<()> {
    let ui = UiContext::detect(json, verbose);
    let config = load_config(source, &ui);
    let entries = registry::scan(source, &config);

    if json {
        for (i, entry) in entries.iter().enumerate() {
            let line = serde_json::json!({
                "event": "template",
                "index": i + 1,
                "path": entry.relative_path,
                "description": entry.description,
            });
            println!("{}", serde_json::to_string(&line)?);
        }
        return Ok(());
    }

    if entries.is_empty() {
        ui.warn(format!("No templates found under {}", source.display()));
        return Ok(());
    }

    ui.header("Available scripts:");
    println!();
    print_registry(&ui, &entries);
    println!();
    ui.info(format!(
        "{} template(s); run 'shipkit install' to deploy a selection",
        entries.len()
    ));

    Ok(())
}

fn cmd_install(opts: InstallOpts, json: bool, verbose: u8) -> Result<()> {
    let ui = UiContext::detect(json, verbose);
    let fs = LocalFileSystem::new();
    let interactive = !json && !opts.yes && std::io::stdin().is_terminal();

    ui.header("Helper Scripts Installation");
    if !json {
        println!();
    }

    let config = load_config(&opts.source, &ui);

    let dest_input = match opts.dest {
        Some(dest) => dest,
        None => PathBuf::from(prompt_text(
            interactive,
            "Target directory for installation",
            Some("."),
        )?),
    };
    let dest_dir = fs.expand_home(&dest_input);

    if !fs.exists(&dest_dir) {
        if !confirm(interactive, "Directory doesn't exist. Create it?", true)? {
            bail!("installation cancelled");
        }
        fs.create_dir_all(&dest_dir)?;
        ui.success(format!("Directory created: {}", dest_dir.display()));
    }

    let container_name = match opts.container_name {
        Some(name) => name,
        None => prompt_text(interactive, "Container name", None)?,
    };
    if container_name.trim().is_empty() {
        bail!("container name is required");
    }

    let image_name = match opts.image_name {
        Some(name) => name,
        None => prompt_text(
            interactive,
            "Docker image name",
            Some(&format!("{container_name}:latest")),
        )?,
    };
    let display_name = match opts.display_name {
        Some(name) => name,
        None => prompt_text(
            interactive,
            "Display name for status output",
            Some(&container_name),
        )?,
    };
    let dockerfile_path = match opts.dockerfile {
        Some(path) => path,
        None => prompt_text(interactive, "Path to Dockerfile", Some("./Dockerfile"))?,
    };

    let entries = registry::scan(&opts.source, &config);

    let selection = match opts.select {
        Some(selection) => selection,
        None => {
            if !interactive {
                bail!("no scripts selected (pass --select)");
            }
            println!();
            ui.header("Available scripts:");
            println!();
            print_registry(&ui, &entries);
            println!();
            ui.detail("Enter numbers separated by spaces (e.g., 1 2 3)");
            ui.detail("Enter 'all' for all scripts");
            ui.detail("Enter 'core' for the core container scripts");
            prompt_text(true, "Select scripts to install", None)?
        }
    };

    let resolution = selector::resolve(&selection, &entries, &config.preset.core);
    for token in &resolution.dropped {
        ui.warn(format!("Ignoring selection token '{token}'"));
    }
    if resolution.selected.is_empty() {
        bail!("no scripts selected");
    }

    if !json {
        println!();
        ui.header("Summary");
        println!();
        println!("  Target directory:  {}", dest_dir.display());
        println!("  Container name:    {container_name}");
        println!("  Image name:        {image_name}");
        println!("  Display name:      {display_name}");
        println!("  Dockerfile path:   {dockerfile_path}");
        println!();
        println!("  Scripts to install:");
        for path in &resolution.selected {
            println!("    {}", ui.paint(path, colors::ACCENT));
        }
        println!();
    }

    if interactive && !confirm(true, "Install these scripts?", true)? {
        ui.warn("Installation cancelled");
        return Ok(());
    }

    if !json {
        ui.header("Installing...");
        println!();
    }

    let bindings = Bindings {
        container_name,
        image_name,
        display_name,
        dockerfile_path,
    };
    let request = DeployRequest {
        source_root: &opts.source,
        dest_dir: &dest_dir,
        selected: &resolution.selected,
        support_files: &config.support.files,
        bindings: &bindings,
        options: DeployOptions {
            force: opts.force,
            strip_comments: opts.strip_comments,
        },
    };

    let mut resolver = InteractiveResolver::new();
    let report = deploy(&fs, &mut resolver, &request, |event| {
        render_event(&ui, &event);
    });

    print_report(&ui, json, &report, &dest_dir, &resolution.selected)
}

fn load_config(source: &Path, ui: &UiContext) -> Config {
    let path = source.join(Config::FILE_NAME);
    if !path.exists() {
        return Config::default();
    }
    match Config::load_with_warnings(&path) {
        Ok((config, warnings)) => {
            print_config_warnings(ui, &warnings);
            config
        }
        Err(e) => {
            ui.warn(format!("Ignoring {}: {}", path.display(), e));
            Config::default()
        }
    }
}

fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => ui.warn(format!(
                "Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )),
            None => ui.warn(format!(
                "Unknown config key '{}' in {}",
                w.key,
                w.file.display()
            )),
        }
        if let Some(suggestion) = &w.suggestion {
            ui.warn(format!("  Did you mean '{suggestion}'?"));
        }
    }
}

fn print_registry(ui: &UiContext, entries: &[TemplateEntry]) {
    let width = entries
        .iter()
        .map(|e| e.relative_path.width())
        .max()
        .unwrap_or(0);
    for (i, entry) in entries.iter().enumerate() {
        let pad = " ".repeat(width.saturating_sub(entry.relative_path.width()));
        println!(
            "  {:>2}) {}{}  {}",
            i + 1,
            entry.relative_path,
            pad,
            ui.paint(&entry.description, colors::DIM)
        );
    }
}

fn render_event(ui: &UiContext, event: &DeployEvent) {
    match event {
        DeployEvent::SupportDeployed { name } => ui.success(format!("Deployed: {name}")),
        DeployEvent::SupportMissing { name } => {
            ui.warn(format!("Support file not found: {name}"));
        }
        DeployEvent::SupportFailed { name, message } => {
            ui.warn(format!("Failed to deploy {name}: {message}"));
        }
        DeployEvent::Deployed {
            name,
            placeholders_filled,
        } => {
            ui.success(format!("Deployed: {name}"));
            if ui.verbose > 0 && *placeholders_filled > 0 {
                ui.detail(format!("filled {placeholders_filled} placeholder(s)"));
            }
        }
        DeployEvent::Declined { name } => ui.warn(format!("Skipped: {name}")),
        DeployEvent::Failed { name, message } => {
            ui.error(format!("Failed to deploy {name}: {message}"));
        }
    }
}

fn print_report(
    ui: &UiContext,
    json: bool,
    report: &DeployReport,
    dest_dir: &Path,
    selected: &[String],
) -> Result<()> {
    if json {
        let summary = serde_json::json!({
            "event": "install",
            "status": if report.is_success() { "success" } else { "partial" },
            "deployed": report.deployed.len(),
            "skipped": report.skipped.len(),
            "failed": report.failed.len(),
            "dest": dest_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string(&summary)?);
        return Ok(());
    }

    println!();
    ui.header("Installation Complete");
    println!();

    if !report.deployed.is_empty() {
        ui.success(format!(
            "{} script(s) installed successfully",
            report.deployed.len()
        ));
    }
    if !report.skipped.is_empty() {
        ui.warn(format!(
            "{} script(s) skipped (existing files kept)",
            report.skipped.len()
        ));
    }
    if !report.failed.is_empty() {
        ui.error(format!(
            "{} script(s) failed to install",
            report.failed.len()
        ));
    }

    println!();
    ui.info(format!("Scripts installed to: {}", dest_dir.display()));
    println!();
    ui.header("Next Steps");
    println!();
    println!("  1. Review the installed scripts: cd {}", dest_dir.display());
    println!("  2. Check container status: ./status.sh");
    println!("  3. Customize further if needed");

    if selected.iter().any(|s| s.ends_with("rebuild.sh")) {
        println!();
        ui.warn("Remember to customize the docker run command in rebuild.sh");
    }

    Ok(())
}

fn prompt_text(interactive: bool, prompt: &str, default: Option<&str>) -> Result<String> {
    if !interactive {
        return Ok(default.unwrap_or_default().to_string());
    }

    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

fn confirm(interactive: bool, prompt: &str, default: bool) -> Result<bool> {
    if !interactive {
        return Ok(default);
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
