use std::env;

mod config;
mod logger;
mod routing;

/// Default config file base name ("devserver.toml" in the working directory)
const DEFAULT_CONFIG_PATH: &str = "devserver";

const USAGE: &str = "\
Usage: devserver_config [OPTIONS] [CONFIG_PATH]

Loads the dev-server configuration record, validates it, and prints the
effective configuration. CONFIG_PATH is the config file path without
extension (default: devserver).

Options:
  --check         validate the configuration and exit
  --json          print the effective configuration as JSON
  --match <PATH>  show which proxy rule applies to a request path
  -h, --help      show this help";

/// Parsed command line options
struct Options {
    config_path: String,
    check: bool,
    json: bool,
    match_path: Option<String>,
    help: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options, String> {
    let mut opts = Options {
        config_path: DEFAULT_CONFIG_PATH.to_string(),
        check: false,
        json: false,
        match_path: None,
        help: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => opts.check = true,
            "--json" => opts.json = true,
            "--match" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--match requires a request path".to_string())?;
                opts.match_path = Some(path);
            }
            "-h" | "--help" => opts.help = true,
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown option: {flag}"));
            }
            path => opts.config_path = path.to_string(),
        }
    }

    Ok(opts)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = match parse_args(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let cfg = config::Config::load_from(&opts.config_path)?;
    logger::init(&cfg)?;

    if let Err(err) = cfg.validate() {
        logger::log_error(&format!("Invalid configuration: {err}"));
        std::process::exit(1);
    }

    if opts.check {
        logger::log_validation_ok();
        return Ok(());
    }

    // Machine-readable modes keep stdout free of log lines
    if let Some(path) = opts.match_path.as_deref() {
        match cfg.rule_for(path) {
            Some((prefix, rule)) => {
                println!("{path} -> {} (rule {prefix})", rule.target);
            }
            None => println!("{path} is not proxied"),
        }
        return Ok(());
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let addr = cfg.get_socket_addr()?;
    logger::log_config_loaded(&opts.config_path, &cfg);
    logger::log_effective_config(&addr, &cfg);

    Ok(())
}
