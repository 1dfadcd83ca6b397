use anyhow::Result;
use clap::{Parser, ValueEnum};
use dendron2logseq_config::Config;
use dendron2logseq_engine::{
    EmptyLines, FrontmatterInfo, Options, TitleMode, TransformOutput, check_title_uniqueness, io,
    transform,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "dendron2logseq")]
#[command(about = "Convert a Dendron vault to a Logseq graph")]
#[command(version)]
struct Cli {
    /// Path to the Dendron vault directory
    vault_path: Option<PathBuf>,

    /// Destination directory for the Logseq graph
    output_path: Option<PathBuf>,

    /// Drop frontmatter instead of keeping it as a code block
    #[arg(long)]
    remove_frontmatter: bool,

    /// Promote the frontmatter title to an alias:: property
    #[arg(long, conflicts_with = "use_title")]
    alias_title: bool,

    /// Promote the frontmatter title to a title:: property.
    /// Refuses to run when two notes share a title
    #[arg(long)]
    use_title: bool,

    /// Indent with four spaces instead of tabs
    #[arg(long)]
    four_space_indent: bool,

    /// Empty-line policy: keep all (none), drop all (all), or trim runs
    /// down to one and drop them after headings (trim)
    #[arg(long, value_enum)]
    remove_empty_lines: Option<EmptyLinesArg>,

    /// Answer yes to every prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Config file path (defaults to ~/.config/dendron2logseq/config.toml)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmptyLinesArg {
    None,
    All,
    Trim,
}

impl From<EmptyLinesArg> for EmptyLines {
    fn from(arg: EmptyLinesArg) -> Self {
        match arg {
            EmptyLinesArg::None => EmptyLines::None,
            EmptyLinesArg::All => EmptyLines::All,
            EmptyLinesArg::Trim => EmptyLines::Trim,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    let Some(vault_path) = cli.vault_path.clone().or_else(|| config.vault_path.clone()) else {
        eprintln!("Error: no vault path given and none configured");
        eprintln!("Usage: dendron2logseq <vault-path> <output-path>");
        process::exit(1);
    };
    let Some(output_path) = cli.output_path.clone().or_else(|| config.output_path.clone()) else {
        eprintln!("Error: no output path given and none configured");
        eprintln!("Usage: dendron2logseq <vault-path> <output-path>");
        process::exit(1);
    };

    let options = effective_options(&cli, config.options);

    if let Err(e) = io::validate_vault_dir(&vault_path) {
        eprintln!(
            "Error: vault path '{}' is invalid: {e}",
            vault_path.display()
        );
        process::exit(1);
    }

    prepare_output_dir(&output_path, cli.yes)?;
    run(&vault_path, &output_path, &options, cli.yes)
}

/// CLI flags win over config file values.
fn effective_options(cli: &Cli, defaults: Options) -> Options {
    let title_mode = if cli.alias_title {
        TitleMode::Alias
    } else if cli.use_title {
        TitleMode::Property
    } else {
        defaults.title_mode
    };
    Options {
        remove_frontmatter: cli.remove_frontmatter || defaults.remove_frontmatter,
        title_mode,
        four_space_indent: cli.four_space_indent || defaults.four_space_indent,
        empty_lines: cli
            .remove_empty_lines
            .map(EmptyLines::from)
            .unwrap_or(defaults.empty_lines),
    }
}

fn prepare_output_dir(path: &Path, yes: bool) -> Result<()> {
    if !path.is_dir() {
        println!("{} does not exist, creating it", path.display());
        fs::create_dir_all(path)?;
        return Ok(());
    }
    let items = fs::read_dir(path)?.count();
    if items > 0 {
        println!("Destination {} contains {items} items.", path.display());
        println!("Nothing will be deleted, but files might be overwritten.");
        if !yes && !ask_for_confirmation("Continue?", Some(false))? {
            eprintln!("Aborting.");
            process::exit(1);
        }
    }
    Ok(())
}

fn run(vault_path: &Path, output_path: &Path, options: &Options, yes: bool) -> Result<()> {
    println!("Processing Dendron vault at {}", vault_path.display());

    let vault = io::scan_vault(vault_path)?;
    for path in &vault.ignored {
        println!("IGNORED: {}", path.display());
    }
    for path in &vault.unhandled {
        eprintln!("WARNING: file not handled, {}", path.display());
    }

    // Read every note and collect frontmatter before anything is written,
    // so duplicate titles can stop the whole run.
    let mut notes = Vec::new();
    for entry in &vault.notes {
        notes.push(io::read_note(entry, vault_path)?);
    }
    let outputs: Vec<TransformOutput> = notes.iter().map(|n| transform(n, options)).collect();

    let infos: Vec<FrontmatterInfo> = outputs.iter().map(|o| o.info.clone()).collect();
    if let Err(duplicates) = check_title_uniqueness(&infos) {
        eprintln!("{duplicates}");
        if options.title_mode == TitleMode::Property {
            eprintln!("No duplicate titles allowed with --use-title. Please resolve and re-run.");
            process::exit(1);
        }
        if !yes && !ask_for_confirmation("Continue anyway?", Some(true))? {
            eprintln!("Aborting.");
            process::exit(1);
        }
    }

    for (note, output) in notes.iter().zip(&outputs) {
        for warning in &output.warnings {
            eprintln!("WARNING: {}: {warning}", note.name);
        }
        io::write_page(output_path, &note.name, &output.text)?;
        println!("{} -> {}", note.name, note.name.output_file_name());
    }

    if let Some(assets) = &vault.assets_dir {
        let copied = io::copy_assets(assets, output_path)?;
        println!(
            "Copied {copied} asset files to {}",
            output_path.join("assets").display()
        );
    }

    Ok(())
}


fn ask_for_confirmation(msg: &str, default: Option<bool>) -> Result<bool> {
    let yes = if default == Some(true) { "Y" } else { "y" };
    let no = if default == Some(false) { "N" } else { "n" };
    loop {
        print!("{msg} [{yes}/{no}] ");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        match (answer.trim().to_lowercase().as_str(), default) {
            ("y", _) => return Ok(true),
            ("n", _) => return Ok(false),
            ("", Some(d)) => return Ok(d),
            _ => {}
        }
    }
}
