use html::RenderOptions;
use tracing::{error, info, span, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// The demo page: a small form plus a theme picker
mod demo;

struct Args {
    pub output: Option<String>,
    pub dir: String,
    pub title: String,
    pub escape: bool,
    pub trace: bool,
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: tailhtml [OUTPUT] [--dir DIR] [--title TITLE] [--escape] [--trace]");
            std::process::exit(2);
        }
    };
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_span_events(FmtSpan::ACTIVE)
            .with_max_level(Level::DEBUG)
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
            .init();
        info!("Logger initialized");
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    let args = Args {
        trace: pargs.contains(["-t", "--trace"]),
        escape: pargs.contains("--escape"),
        dir: pargs
            .opt_value_from_str("--dir")?
            .unwrap_or_else(|| "templates".to_string()),
        title: pargs
            .opt_value_from_str("--title")?
            .unwrap_or_else(|| "Document".to_string()),
        output: pargs.opt_free_from_str()?,
    };
    Ok(args)
}

fn run(args: &Args) -> html::Result<()> {
    let options = RenderOptions {
        escape: args.escape,
    };
    let page = demo::form_page(&args.title);
    match &args.output {
        Some(filename) => {
            let span = span!(Level::DEBUG, "Writing page");
            let _enter = span.enter();
            let path = page.save_with(&args.dir, filename, true, &options)?;
            info!("Saved {}", path.display());
        }
        None => print!("{}", page.render_with(&options)),
    }
    Ok(())
}
