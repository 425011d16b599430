use blazestyle_lib::blaze_generate::blaze_style;
use blazestyle_lib::parser::{css_check, style_json};
use blazestyle_lib::StyleError;
use clap::Parser;
use log::info;
use std::fs;

#[derive(Parser)]
#[command(name = "BlazeStyle")]
#[command(about = "Render JSON style documents to CSS")]
struct Args {
    /// Input style document (JSON).
    input: String,

    /// Output file name. Prints to stdout when omitted.
    output: Option<String>,

    /// Re-parse the generated CSS and fail if it is not valid.
    #[arg(long)]
    check: bool,

    /// Wrap each block in an inline <style> element.
    #[arg(long)]
    style_tag: bool,

    /// CSP nonce for --style-tag.
    #[arg(long, requires = "style_tag")]
    nonce: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    let json = match fs::read_to_string(&args.input) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading style document {}: {}", args.input, e);
            std::process::exit(1);
        }
    };
    info!("read {} bytes from {}", json.len(), args.input);

    let output = match render(&json, &args) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            info!("wrote {} bytes to {}", output.len(), path);
        }
        None => println!("{}", output),
    }
}

fn render(json: &str, args: &Args) -> Result<String, StyleError> {
    let blocks = style_json::parse_style_document(json)?;
    let css = blaze_style::format_stylesheet(&blocks)?;

    if args.check {
        let sheet = css_check::parse_and_own_css(&css)?;
        info!("check passed: {} rules", sheet.rules.len());
    }

    if args.style_tag {
        blaze_style::render_style_tags(&blocks, args.nonce.as_deref())
    } else {
        Ok(css)
    }
}
