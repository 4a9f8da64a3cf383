use s3_crud::{Outcome, args, run_app};

fn main() {
    // Parse and validate command-line arguments
    let args = args::args_checks();

    match run_app(&args) {
        Ok(Outcome::Success) => {}
        Ok(Outcome::NotFound) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
