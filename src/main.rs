use clap::Parser;
use getcall::WriteOptions;
use getcall::registry::Registry;
use getcall::rewrite::RewriteOptions;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Rewrite bare member references (`name.`) in script files into registry
/// accessor calls (`this.get('name').`), leaving string literals and
/// comments untouched.
#[derive(Parser, Debug)]
#[command(name = "getcall", version)]
struct Cli {
    /// Script file to rewrite. Required unless --all is given.
    file: Option<PathBuf>,

    /// YAML file listing known identifiers (`ids: [...]`).
    #[arg(long, value_name = "PATH")]
    registry: Option<PathBuf>,

    /// Additional known identifier; may be repeated.
    #[arg(long = "id", value_name = "NAME")]
    ids: Vec<String>,

    /// Overwrite the input file instead of printing to stdout.
    #[arg(long)]
    write: bool,

    /// Also write the scan classification report as `{file}.scan.json`.
    #[arg(long)]
    json: bool,

    /// Bulk mode: rewrite every matching file under this directory.
    #[arg(long, value_name = "DIR", conflicts_with = "file")]
    all: Option<PathBuf>,

    /// File extension to match in bulk mode.
    #[arg(long, value_name = "EXT", default_value = "script")]
    ext: String,

    /// Bulk mode: write results under this directory instead of in place.
    #[arg(long, value_name = "DIR", requires = "all")]
    out_dir: Option<PathBuf>,

    /// Rewrite matches inside string literals and comments too
    /// (byte-compatible with the legacy tool).
    #[arg(long)]
    rewrite_inside_literals: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut registry = match &cli.registry {
        Some(path) => Registry::load_yaml_file(path)?,
        None => Registry::new(),
    };
    registry.extend(cli.ids.iter().cloned());

    let rewrite_opts = RewriteOptions {
        rewrite_inside_literals: cli.rewrite_inside_literals,
    };
    let write_opts = WriteOptions {
        in_place: cli.write,
        write_scan_json: cli.json,
    };

    if let Some(root) = &cli.all {
        return getcall::rewrite_all_in_dirs(
            root,
            cli.out_dir.as_deref(),
            &cli.ext,
            &registry,
            &rewrite_opts,
            &write_opts,
        );
    }

    let Some(file) = &cli.file else {
        return Err("either a FILE argument or --all DIR is required".into());
    };

    let rewritten = getcall::run_with_options(file, &registry, &rewrite_opts, &write_opts)?;
    if !cli.write {
        // the rewritten text is emitted verbatim; no trailing newline is added.
        print!("{rewritten}");
    }
    Ok(())
}
