use anyhow::Result;
use clap::Parser;
use std::path::Path;

use standings_render::cli::Args;
use standings_render::config::defaults::DIAGNOSTIC_PATH;
use standings_render::config::Settings;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let settings = Settings::from_args(&args);

    match standings_render::run(&settings) {
        Ok(report) => {
            log::info!(
                "{} rows drawn, {} fallbacks",
                report.rows_drawn,
                report.degradations.len()
            );
            println!("Image generated: {}", report.output_path.display());
            Ok(())
        }
        Err(err) => {
            let diagnostic = Path::new(DIAGNOSTIC_PATH);
            if let Err(e) = standings_render::write_diagnostic(&err, &settings, diagnostic) {
                log::error!("Could not write diagnostic image: {}", e);
            }
            println!(
                "Render failed. Debug image saved to {}",
                diagnostic.display()
            );
            Err(err.into())
        }
    }
}
