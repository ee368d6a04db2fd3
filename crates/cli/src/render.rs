//! Terminal rendering of page views.

use colored::Colorize;
use engine_client::QueryInterpretation;
use results::{DetailView, RowView};
use server::{
    DUAL_TRACK_NOTICE, DetailLookup, EXAMPLE_QUERIES, PageView, ResultSection, SearchStatus,
    SearchView,
};
use session::ProfileForm;

pub fn print_page(view: &PageView) {
    match view {
        PageView::Welcome => {
            println!("{}", "Kineto".bold().magenta());
            println!("Find movies by describing what you're in the mood for.");
            println!("Type {} to begin.", "start".cyan());
        }
        PageView::AuthMenu => {
            println!("{}", "Welcome! How would you like to continue?".bold());
            println!("  {}   {}   {}", "login".cyan(), "signup".cyan(), "back".cyan());
        }
        PageView::Login => {
            println!("{}", "Log in".bold());
            println!("  login <email> <password>   (any valid email works in demo mode)");
        }
        PageView::Signup => {
            println!("{}", "Create an account".bold());
            println!("  signup <email> <password> <confirm>");
        }
        PageView::Profile(form) => print_profile(form),
        PageView::Search(view) => print_search(view),
    }
}

fn print_profile(form: &ProfileForm) {
    println!("{}", "Tell us about yourself".bold());
    println!("  profile first=.. last=.. day=.. month=.. year=.. gender=..");
    println!("          code=.. phone=.. city=.. state=.. country=..");
    if !form.first_name.is_empty() || !form.last_name.is_empty() {
        println!(
            "  {} {} {}",
            "Saved:".dimmed(),
            form.first_name,
            form.last_name
        );
    }
}

pub fn print_search(view: &SearchView) {
    println!("{}", view.greeting.bold().magenta());
    println!(
        "{} mode={} top={} theme={}",
        "Settings:".dimmed(),
        view.preferences.mode,
        view.preferences.top_n,
        view.preferences.appearance
    );
    println!("  {}", view.preferences.mode.description().dimmed());
    if !view.query_input.is_empty() {
        println!("{} {}", "Query:".dimmed(), view.query_input);
    }

    if let Some(error) = &view.error {
        println!("{}", error.message.red());
        println!("{}", error.detail.dimmed());
    }

    match &view.status {
        SearchStatus::Idle => {
            println!("{}", view.status.message().blue());
            print_examples();
        }
        SearchStatus::NoResults => println!("{}", view.status.message().yellow()),
        SearchStatus::Found { .. } => {
            println!("{}", view.status.message().green());
            if let Some(pq) = &view.interpretation {
                print_interpretation(pq);
            }
            if view.dual_track {
                println!("\n{}", "Dual-Track Results".bold());
                println!("{}", DUAL_TRACK_NOTICE.dimmed());
            }
            for section in &view.sections {
                print_section(section);
            }
            println!(
                "\n{} {}",
                "Learn more:".bold(),
                "select <rank>".cyan()
            );
        }
    }

    match &view.details {
        Some(DetailLookup::Found(details)) => print_details(details),
        Some(DetailLookup::NotFound(title)) => {
            println!("{}", DetailLookup::not_found_message(title).yellow())
        }
        None => {}
    }
}

fn print_examples() {
    println!("{}", "Try an example:".dimmed());
    for (i, query) in EXAMPLE_QUERIES.iter().enumerate() {
        println!("  {} {}", format!("example {}", i + 1).cyan(), query);
    }
}

fn print_interpretation(pq: &QueryInterpretation) {
    println!("{}", "Query Interpretation".bold());
    for (label, values) in [
        ("Genres", &pq.genres),
        ("Decades", &pq.decades),
        ("Actors", &pq.actors),
        ("Moods", &pq.moods),
    ] {
        if !values.is_empty() {
            println!("  {}: {}", label.bold(), values.join(", "));
        }
    }
}

fn print_section(section: &ResultSection) {
    println!("\n{}", section.heading.bold().blue());
    if !section.caption.is_empty() {
        println!("{}", section.caption.dimmed());
    }
    for row in &section.rows {
        print_row(row);
    }
}

fn print_row(row: &RowView) {
    println!(
        "{}. {}  {}",
        row.rank.to_string().green(),
        row.heading.bold(),
        format!("Score: {}", row.score).dimmed()
    );
    if let Some(caption) = &row.caption {
        println!("   {}", caption);
    }
}

pub fn print_details(details: &DetailView) {
    println!("\n{}", details.header.bold().magenta());
    for (label, value) in &details.facts {
        println!("{} {}", format!("{label}:").bold(), value);
    }
    println!("\n{}", details.overview);
}
