// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use vibeship::app_state::AppState;
use vibeship::bootstrap::{self, BootstrapResult};
use vibeship::config::ValidatedConfig;
use vibeship::content::SiteContent;
use vibeship::runtime_paths::RuntimePaths;
use vibeship::util::log_level_changer::default_rules;
use vibeship::{headers, public, util};

const HELP_TEXT: &str = "\
Usage: vibeship [-C <root>] [-h|--help]

Serves the VibeShip Knowledge Base discovery documents (/robots.txt,
/sitemap.xml, /llms.txt) and the site layout.

Options:
  -C <root>    Runtime root holding config.yaml, content/ and site/ (default: .)
  -h, --help   Show this help
";

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if matches!(parsed_args.mode, RunMode::Help) {
        print!("{}", HELP_TEXT);
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    match System::new().block_on(run_server(bootstrap)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(bootstrap: BootstrapResult) -> std::io::Result<()> {
    let validated_config = Arc::new(bootstrap.validated_config);
    let runtime_paths = bootstrap.runtime_paths;
    let site_content = bootstrap.site_content;

    // Configure logging with a stable format
    let logger = env_logger::Builder::from_default_env()
        .filter_level(validated_config.log_level_filter())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .build();

    util::init_logger(default_rules(), logger).map_err(|error| {
        eprintln!("❌ Failed to initialize logger: {}", error);
        std::io::Error::other(error.to_string())
    })?;

    log_startup_info(&validated_config, &runtime_paths, &site_content);

    let app_state = Arc::new(AppState::new(
        &validated_config.app.name,
        runtime_paths,
        site_content,
    ));
    info!(
        "✅ App state initialized with app name: {}",
        validated_config.app.name
    );

    let workers = validated_config.server.workers;
    let address = {
        let (host, port) = validated_config.server.address_tuple();
        (host.to_string(), port)
    };

    let factory = {
        let config_for_app = validated_config.clone();
        let app_state_for_app = app_state.clone();

        move || {
            App::new()
                .app_data(web::Data::from(config_for_app.clone()))
                .app_data(web::Data::from(app_state_for_app.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .wrap(headers::Headers)
                .configure(public::configure)
        }
    };

    HttpServer::new(factory)
        .workers(workers)
        .bind(address)?
        .run()
        .await
}

fn log_startup_info(
    config: &ValidatedConfig,
    runtime_paths: &RuntimePaths,
    site_content: &SiteContent,
) {
    for line in startup_lines(config, runtime_paths, site_content) {
        info!("{}", line);
    }
    if !runtime_paths.kb_dir.is_dir() {
        log::warn!(
            "Knowledge base directory {} does not exist; all section counts will be 0",
            runtime_paths.kb_dir.display()
        );
    }

    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {}", current_dir.display());
    }
}

fn startup_lines(
    config: &ValidatedConfig,
    runtime_paths: &RuntimePaths,
    site_content: &SiteContent,
) -> Vec<String> {
    let mut lines = vec![
        format!("Starting {} - {}", config.app.name, config.app.description),
        format!("Workers: {}", config.server.workers),
        format!(
            "Listening on http://{}:{}",
            config.server.host, config.server.port
        ),
        match config.site.base_url.as_deref() {
            Some(base_url) => format!("Canonical origin: {}", base_url),
            None => "Canonical origin: taken from each request's Host".to_string(),
        },
        format!(
            "Knowledge base directory: {}",
            runtime_paths.kb_dir.display()
        ),
    ];
    lines.extend(site_content.source_lines(&runtime_paths.site_dir));
    lines.push(format!(
        "Config file: {}",
        runtime_paths.config_file.display()
    ));
    lines.push(format!("Runtime root: {}", runtime_paths.root.display()));
    lines
}

#[derive(Debug)]
enum RunMode {
    Serve,
    Help,
}

#[derive(Debug)]
struct ParsedArgs {
    runtime_root: PathBuf,
    mode: RunMode,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| is_help_flag(arg)) {
        return Ok(ParsedArgs {
            runtime_root: PathBuf::from("."),
            mode: RunMode::Help,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "--" {
            continue;
        } else if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = PathBuf::from(value);
        } else if arg.eq_ignore_ascii_case("help") {
            return Ok(ParsedArgs {
                runtime_root,
                mode: RunMode::Help,
            });
        } else {
            return Err(format!("Unknown argument '{}'", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;
    Ok(ParsedArgs {
        runtime_root,
        mode: RunMode::Serve,
    })
}

fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

fn make_runtime_root_absolute(runtime_root: PathBuf) -> Result<PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}
