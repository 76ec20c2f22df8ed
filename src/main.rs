// Entry point and interactive menu.
//
// The tables are loaded once at startup and never change. The menu walks the
// four cascading selectors, toggles the language, prints the report for the
// current selection and exports it. `--once` prints a single report and exits.
mod complaints;
mod config;
mod error;
mod filters;
mod i18n;
mod loader;
mod metrics;
mod output;
mod render;
mod session;
mod suggestions;
mod supply;
mod types;
mod util;
mod view;

use clap::Parser;
use config::{Args, DashboardConfig};
use filters::options;
use i18n::{text, TextKey};
use loader::{LoadReport, LoadSummary};
use session::Session;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use types::{Selection, Tables};

struct AppState {
    config: DashboardConfig,
    tables: Tables,
    session: Session,
}

/// Read a single trimmed line after printing `prompt`; `None` once stdin is closed.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn read_choice() -> Option<String> {
    read_line("Enter choice: ")
}

/// Show a numbered selector and return the picked option.
///
/// An empty answer keeps `current` (or the first option when `current` is no
/// longer offered).
fn prompt_pick(label: &str, opts: &[String], current: Option<&str>) -> Option<String> {
    let current = filters::keep_or_first(current, opts);
    print!("{}", render::render_options(label, opts, current.as_deref()));
    if opts.is_empty() {
        return None;
    }
    loop {
        let Some(answer) = read_line("Pick a number (Enter keeps current): ") else {
            return current;
        };
        if answer.is_empty() {
            return current;
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=opts.len()).contains(&n) => return Some(opts[n - 1].clone()),
            _ => println!("Invalid choice. Please enter 1 to {}.", opts.len()),
        }
    }
}

fn describe(name: &str, report: Option<&LoadReport>) {
    match report {
        Some(r) => println!(
            "{}: {} of {} rows loaded ({} skipped, {} unreadable)",
            name,
            util::format_int(r.loaded_rows),
            util::format_int(r.total_rows),
            util::format_int(r.skipped_rows),
            util::format_int(r.parse_errors)
        ),
        None => println!("{}: unavailable, continuing without it", name),
    }
}

fn print_load_summary(state: &AppState, summary: &LoadSummary) {
    println!("Processing dataset...");
    describe("Schemes", summary.schemes.as_ref());
    describe("Water supply", summary.supply.as_ref());
    if state.config.paths.complaints.is_some() {
        describe("Disgruntled consumers", summary.complaints.as_ref());
    }
    println!();
}

/// Walk district, division and sub-division, then the scheme.
fn handle_choose(state: &mut AppState) {
    let AppState { tables, session, .. } = state;
    let table = &tables.schemes;
    let language = session.language;
    let current = session.selection().clone();

    let top = options(table, None, None, None);
    let district = prompt_pick(
        text(language, TextKey::District),
        &top.districts,
        current.district.as_deref(),
    );
    // A changed ancestor resets the levels below it to their first option.
    let district_changed = district != current.district;
    let by_district = options(table, district.as_deref(), None, None);
    let division = prompt_pick(
        text(language, TextKey::Division),
        &by_district.divisions,
        current.division.as_deref().filter(|_| !district_changed),
    );
    let division_changed = district_changed || division != current.division;
    let by_division = options(table, district.as_deref(), division.as_deref(), None);
    let sub_division = prompt_pick(
        text(language, TextKey::SubDivision),
        &by_division.sub_divisions,
        current.sub_division.as_deref().filter(|_| !division_changed),
    );

    let resolved = session.resolve(
        table,
        &Selection {
            district,
            division,
            sub_division,
            scheme_name: current.scheme_name,
        },
    );
    let scheme = prompt_pick(
        text(language, TextKey::SelectVillage),
        &resolved.schemes,
        session.selection().scheme_name.as_deref(),
    );
    if let Some(scheme) = scheme {
        session.choose_scheme(table, &scheme);
    }
    println!();
}

fn handle_view(state: &AppState) {
    let language = state.session.language;
    match view::build_view(
        &state.tables,
        state.session.selection(),
        language,
        state.config.layout,
    ) {
        Ok(v) => println!("{}", render::render_view(&v)),
        Err(e) if e.is_no_data() => println!("{}", render::render_no_data(language)),
        Err(e) => error!(error = %e, "failed to build report"),
    }
}

fn handle_export(state: &AppState) {
    let built = view::build_view(
        &state.tables,
        state.session.selection(),
        state.session.language,
        state.config.layout,
    );
    let v = match built {
        Ok(v) => v,
        Err(e) => {
            println!("Nothing to export: {}\n", e);
            return;
        }
    };
    match output::export_view(&v, &state.config.out_dir) {
        Ok(files) => {
            for f in &files {
                info!(path = %f.display(), "report exported");
                println!("Saved {}", f.display());
            }
            if let Some(series) = &v.supply {
                output::preview_table_rows(&series.export_rows(), 7);
            } else {
                println!();
            }
        }
        Err(e) => eprintln!("Write error: {}\n", e),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let config = DashboardConfig::from(Args::parse());

    let (tables, summary) = loader::load_tables(&config.paths);
    let mut state = AppState {
        session: Session::new(config.language),
        config,
        tables,
    };
    print_load_summary(&state, &summary);

    let initial = state.config.initial.clone();
    state.session.resolve(&state.tables.schemes, &initial);

    if state.config.once {
        handle_view(&state);
        return ExitCode::SUCCESS;
    }

    loop {
        let language = state.session.language;
        println!("{}", text(language, TextKey::Title));
        println!("[1] Choose a scheme");
        println!(
            "[2] Switch language (English / Assamese), now {} [{}]",
            language,
            language.code()
        );
        println!("[3] View report");
        println!("[4] Export report");
        println!("[0] Exit\n");
        let Some(choice) = read_choice() else {
            println!("Exiting the program.");
            return ExitCode::SUCCESS;
        };
        match choice.as_str() {
            "1" => handle_choose(&mut state),
            "2" => {
                let now = state.session.toggle_language();
                println!("Language: {}\n", now);
            }
            "3" => handle_view(&state),
            "4" => handle_export(&state),
            "0" => {
                println!("Exiting the program.");
                return ExitCode::SUCCESS;
            }
            _ => println!("Invalid choice. Please enter 0 to 4.\n"),
        }
    }
}
