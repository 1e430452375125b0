use clap::Parser;
use env_logger::Env;
use fig2ui::{ConvertError, Converter, FixedMetricsProvider, FontMetrics, FontSpec};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// Converts MATLAB GUIDE figures into Qt Designer forms.
///
/// Each INPUT is a JSON dump of a figure file. The form is written beside it
/// as `{stem}_build.ui`, with toolbar icons as `{action}.png`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Figure dumps to convert
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Font written into the window and used for "characters" units
    #[arg(long, default_value = "MS Sans Serif")]
    font_family: String,

    /// Point size of that font
    #[arg(long, default_value_t = 8)]
    point_size: u32,

    /// Skip writing toolbar icon files
    #[arg(long, default_value_t = false)]
    no_icons: bool,

    /// Print the reconciled widget tree as JSON instead of writing files
    #[arg(long, default_value_t = false)]
    dump_tree: bool,

    /// Use approximate font metrics instead of measuring installed fonts
    #[arg(long, default_value_t = false)]
    fixed_metrics: bool,

    /// Name prefix of the root window variable
    #[arg(long, default_value = fig2ui_core::DEFAULT_ROOT_PREFIX)]
    root_prefix: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("fig2ui=info")).init();

    let args = Args::parse();
    let font = FontSpec::new(args.font_family.clone(), args.point_size);

    let mut builder = Converter::builder()
        .with_font(font.clone())
        .with_root_prefix(args.root_prefix.clone())
        .with_icons(!args.no_icons);
    if args.fixed_metrics {
        builder = builder.with_metrics_provider(Arc::new(FixedMetricsProvider::new(
            FontMetrics::approximate(font.point_size),
        )));
    }
    let converter = builder.build();

    let mut failures = 0;
    for input in &args.inputs {
        let result = if args.dump_tree {
            dump_tree(&converter, input)
        } else {
            converter.convert_file(input).map(|_| ())
        };
        if let Err(e) = result {
            log::error!("{}: {}", input.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        log::error!("{} of {} conversions failed", failures, args.inputs.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn dump_tree(converter: &Converter, input: &Path) -> Result<(), ConvertError> {
    let built = converter.build_file(input)?;
    built.diagnostics.log_warnings(&input.display().to_string());
    println!("{}", serde_json::to_string_pretty(&built.document)?);
    Ok(())
}
