use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

mod audit;
mod driver;

#[derive(Parser, Debug)]
#[command(name = "cnshc", version, about = "CNSH to C compiler", long_about = None)]
struct Args {
    /// Path to a .cnsh source file
    path: PathBuf,

    /// Print the compile outcome as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let outcome = driver::compile(&source, &args.path);
    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: cannot serialize outcome: {}", e),
        }
    }
    process::exit(if outcome.success { 0 } else { 1 });
}
