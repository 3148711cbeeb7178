use anyhow::{Result, anyhow};
use catalog::{Catalog, CatalogSource, MovieRecord};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use query::{Facets, Query, SortKey, ViewStats};
use session::{Favorites, SpoilerBoard, SpoilerPhase};
use std::io::{self, BufRead, Write};

/// Plot-Twist Movies - a spoiler-annotated movie catalog
#[derive(Parser)]
#[command(name = "plot-twists")]
#[command(about = "Browse a catalog of movies annotated with plot-twist spoilers", long_about = None)]
struct Cli {
    /// Catalog location: an http(s) URL or a local JSON file
    #[arg(short, long, default_value = "movies.json")]
    source: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies matching a query
    List {
        /// Case-insensitive search over title and description
        #[arg(long)]
        search: Option<String>,

        /// Exact genre selection
        #[arg(long)]
        genre: Option<String>,

        /// Exact country selection
        #[arg(long)]
        country: Option<String>,

        /// Exact availability (platform) selection
        #[arg(long)]
        availability: Option<String>,

        /// Inclusive lower release-year bound
        #[arg(long, default_value_t = 1900)]
        year_from: i32,

        /// Inclusive upper release-year bound
        #[arg(long, default_value_t = 2100)]
        year_to: i32,

        /// Inclusive critic-score bounds
        #[arg(long, default_value_t = 0)]
        critic_min: i32,
        #[arg(long, default_value_t = 100)]
        critic_max: i32,

        /// Inclusive audience-score bounds
        #[arg(long, default_value_t = 0)]
        audience_min: i32,
        #[arg(long, default_value_t = 100)]
        audience_max: i32,

        /// Sort key: year-desc, year-asc, title-asc, title-desc,
        /// critic-desc, critic-asc, audience-desc, audience-asc.
        /// Unknown keys fall back to year-desc.
        #[arg(long, default_value = "year-desc")]
        sort: String,
    },

    /// Show the filter facets derived from the catalog
    Facets,

    /// Show one movie in full, optionally revealing its spoiler
    Show {
        /// Exact title of the movie
        #[arg(long)]
        title: String,

        /// Ask to reveal the spoiler (prompts for confirmation)
        #[arg(long)]
        spoiler: bool,
    },

    /// Interactive browsing session with favorites and spoiler reveal
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // The one fetch per session. Never fails: a broken source degrades to
    // the built-in seed set.
    let source = CatalogSource::parse(&cli.source);
    let catalog = catalog::load(&source).await;
    println!("Loaded {} movies from {}", catalog.len(), source);

    match cli.command {
        Commands::List {
            search,
            genre,
            country,
            availability,
            year_from,
            year_to,
            critic_min,
            critic_max,
            audience_min,
            audience_max,
            sort,
        } => {
            let query = Query {
                search: search.unwrap_or_default(),
                genre,
                country,
                availability,
                year_range: (year_from, year_to),
                critic_range: (critic_min, critic_max),
                audience_range: (audience_min, audience_max),
                sort: SortKey::parse(&sort),
            };
            handle_list(&catalog, &query);
        }
        Commands::Facets => handle_facets(&catalog),
        Commands::Show { title, spoiler } => handle_show(&catalog, &title, spoiler)?,
        Commands::Browse => handle_browse(&catalog)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, query: &Query) {
    let view = query::apply(catalog, query);

    if view.is_empty() {
        // Distinct from the loading state: the query was valid, nothing
        // matched
        println!("{}", "No movies match this query.".yellow());
        return;
    }

    for record in &view {
        print_record_line(record);
    }
    print_summary(&ViewStats::compute(&view), None);
}

/// Handle the 'facets' command
fn handle_facets(catalog: &Catalog) {
    let facets = Facets::derive(catalog);

    println!("{}", "Genres:".bold().blue());
    for genre in &facets.genres {
        println!("  - {genre}");
    }
    println!("{}", "Countries:".bold().blue());
    for country in &facets.countries {
        println!("  - {country}");
    }
    println!("{}", "Platforms:".bold().blue());
    for platform in &facets.platforms {
        println!("  - {platform}");
    }
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, title: &str, reveal: bool) -> Result<()> {
    let record = catalog
        .iter()
        .find(|r| r.title == title)
        .ok_or_else(|| anyhow!("No movie titled {:?} in the catalog", title))?;

    print_record_full(record);

    if reveal {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let mut board = SpoilerBoard::new();
        reveal_spoiler_flow(record, &mut board, &mut lines)?;
    }
    Ok(())
}

/// Walk the reveal state machine for one record: request, prompt for
/// confirmation, then reveal or cancel.
fn reveal_spoiler_flow(
    record: &MovieRecord,
    board: &mut SpoilerBoard,
    lines: &mut dyn Iterator<Item = io::Result<String>>,
) -> Result<()> {
    if board.request(&record.title) != SpoilerPhase::Confirming {
        // Already revealed (or mid-confirmation): nothing to ask
        return Ok(());
    }

    print!(
        "{} This will spoil {}. Reveal? [y/N] ",
        "Spoiler warning:".bold().red(),
        record.title.bold()
    );
    io::stdout().flush()?;

    let answer = lines.next().transpose()?.unwrap_or_default();
    if answer.trim().eq_ignore_ascii_case("y") {
        board.confirm(&record.title);
        println!("{} {}", "Spoiler:".bold().red(), record.spoiler);
    } else {
        board.cancel(&record.title);
        println!("Kept hidden.");
    }
    Ok(())
}

/// Handle the 'browse' command: an interactive loop that rebuilds the
/// query on every edit and recomputes the view from scratch.
fn handle_browse(catalog: &Catalog) -> Result<()> {
    let facets = Facets::derive(catalog);
    let mut current = Query::default();
    let mut favorites = Favorites::new();
    let mut board = SpoilerBoard::new();

    println!("Interactive browse. Type 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", ">".bold().green());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => continue,
            "quit" | "q" => break,
            "help" => print_browse_help(),
            "search" => current.search = rest.to_string(),
            "genre" => current.genre = optional(rest),
            "country" => current.country = optional(rest),
            "platform" => current.availability = optional(rest),
            "years" => match parse_bounds(rest) {
                Some(bounds) => current.year_range = bounds,
                None => println!("Usage: years <from> <to>"),
            },
            "critic" => match parse_bounds(rest) {
                Some(bounds) => current.critic_range = bounds,
                None => println!("Usage: critic <min> <max>"),
            },
            "audience" => match parse_bounds(rest) {
                Some(bounds) => current.audience_range = bounds,
                None => println!("Usage: audience <min> <max>"),
            },
            "sort" => current.sort = SortKey::parse(rest),
            "reset" => current = Query::default(),
            "facets" => {
                println!("Genres:    {}", facets.genres.join(", "));
                println!("Countries: {}", facets.countries.join(", "));
                println!("Platforms: {}", facets.platforms.join(", "));
                continue;
            }
            "fav" => {
                if favorites.toggle(rest) {
                    println!("Favorited {}", rest.bold());
                } else {
                    println!("Unfavorited {}", rest.bold());
                }
            }
            "favs" => {
                let mut titles: Vec<&str> = favorites.iter().collect();
                titles.sort_unstable();
                println!("Favorites ({}): {}", favorites.len(), titles.join(", "));
                continue;
            }
            "spoiler" => {
                match catalog.iter().find(|r| r.title == rest) {
                    Some(record) => reveal_spoiler_flow(record, &mut board, &mut lines)?,
                    None => println!("No movie titled {rest:?} in the catalog"),
                }
                continue;
            }
            "hide" => {
                board.hide(rest);
                println!("Spoiler for {} hidden again.", rest.bold());
                continue;
            }
            _ => {
                println!("Unknown command {command:?}; type 'help'");
                continue;
            }
        }

        // Any query edit above falls through to a full recomputation
        let view = query::apply(catalog, &current);
        if view.is_empty() {
            println!("{}", "No movies match this query.".yellow());
        } else {
            for record in &view {
                let marker = if favorites.contains(&record.title) {
                    "*"
                } else {
                    " "
                };
                print!("{marker} ");
                print_record_line(record);
            }
        }
        print_summary(&ViewStats::compute(&view), Some(favorites.len()));
    }

    Ok(())
}

fn print_browse_help() {
    println!("Commands:");
    println!("  search <text>        set the search text (empty to clear)");
    println!("  genre <value>        select a genre (empty to clear)");
    println!("  country <value>      select a country (empty to clear)");
    println!("  platform <value>     select a platform (empty to clear)");
    println!("  years <from> <to>    inclusive release-year bounds");
    println!("  critic <min> <max>   inclusive critic-score bounds");
    println!("  audience <min> <max> inclusive audience-score bounds");
    println!("  sort <key>           year-desc (default), title-asc, critic-desc, ...");
    println!("  reset                clear the whole query");
    println!("  facets               show catalog facet values");
    println!("  fav <title>          toggle a favorite");
    println!("  favs                 list favorites");
    println!("  spoiler <title>      reveal a spoiler (asks for confirmation)");
    println!("  hide <title>         hide a revealed spoiler");
    println!("  quit                 exit");
}

/// Empty strings clear a facet selection.
fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_bounds(rest: &str) -> Option<(i32, i32)> {
    let mut parts = rest.split_whitespace();
    let min = parts.next()?.parse().ok()?;
    let max = parts.next()?.parse().ok()?;
    Some((min, max))
}

/// One-line rendering of a record for list output.
fn print_record_line(record: &MovieRecord) {
    println!(
        "{} ({}) - {} | {} | {} - critic {} audience {}",
        record.title.bold(),
        record.year,
        record.genre,
        record.country,
        record.availability,
        paint_score(record.critic_score),
        paint_score(record.audience_score),
    );
}

/// Full rendering for the 'show' command. The spoiler stays hidden here.
fn print_record_full(record: &MovieRecord) {
    println!("{} ({})", record.title.bold().blue(), record.year);
    println!("  Genre:        {}", record.genre);
    println!("  Country:      {}", record.country);
    println!("  Availability: {}", record.availability);
    println!("  Critic:       {}", paint_score(record.critic_score));
    println!("  Audience:     {}", paint_score(record.audience_score));
    println!("  {}", record.description);
}

fn print_summary(stats: &ViewStats, favorite_count: Option<usize>) {
    let mut line = format!(
        "{} movies | avg critic {}% | avg audience {}%",
        stats.count, stats.avg_critic, stats.avg_audience
    );
    if let Some(favorites) = favorite_count {
        line.push_str(&format!(" | {favorites} favorites"));
    }
    println!("{}", line.bold());
}

/// Score color bands: >=90 green, >=80 yellow, >=70 orange, else red.
fn paint_score(score: i32) -> ColoredString {
    let text = format!("{score}%");
    if score >= 90 {
        text.green()
    } else if score >= 80 {
        text.yellow()
    } else if score >= 70 {
        text.truecolor(255, 165, 0)
    } else {
        text.red()
    }
}
