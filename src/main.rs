mod canvas;
mod cli;
mod config;
mod driver;
mod error;
mod layout;
mod links;
mod palette;
mod report;
mod source;
mod table;
mod types;
mod ui;

use std::fs;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve the render plan (catalog, options, logo)
    let plan = match config::build_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::create_dir_all(&plan.out_dir) {
        ui::print_error(&format!(
            "Failed to create output directory {}: {}",
            plan.out_dir.display(),
            e
        ));
        std::process::exit(1);
    }

    ui::status(&format!(
        "rendering {} sheets into {}",
        plan.sheets.len(),
        plan.out_dir.display()
    ));

    // Run the batch, streaming a result line per sheet as it completes
    let outcomes = driver::run_batch(&plan, source::fetch_sheet, report::print_outcome);

    let summary = report::summarize(&outcomes);
    report::print_summary(&summary);

    if plan.html_index {
        let index_path = plan.out_dir.join("index.html");
        match links::write_index_html(&outcomes, &index_path) {
            Ok(_) => println!("Download index saved to: {}", index_path.display()),
            Err(e) => eprintln!("Warning: Failed to save download index: {}", e),
        }
    }

    if let Some(path) = &plan.json_summary {
        match report::export_json_summary(&outcomes, path) {
            Ok(_) => println!("JSON summary saved to: {}", path.display()),
            Err(e) => eprintln!("Warning: Failed to save JSON summary: {}", e),
        }
    }

    // Non-zero only when nothing rendered
    if summary.ok == 0 {
        std::process::exit(2);
    }
}
