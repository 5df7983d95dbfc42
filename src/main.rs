//! # folio CLI
//!
//! Command-line interface for the folio personal site toolkit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use folio::{
    commands::{
        self, AddArgs, PostsArgs, ReadingArgs, ServeArgs, SitemapArgs, TagsArgs, ViewsAction,
    },
    reading::{ReadingStatus, ReadingType},
    ui::InteractiveArgs,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/folio/config   Global configuration (editor, interactive mode)
  .folio                   Site configuration (content directories, site URL, views)
  .env                     Secrets in the site root (SUPABASE_URL, SUPABASE_ANON_KEY, SITE_URL)

Content Layout (default):
  src/content/blog/        Blog posts (.md/.mdx with YAML frontmatter)
  src/content/works/       Works and projects
  src/content/reading/     Reading list entries

Getting Started:
  folio init                         Initialize a site in the current directory
  folio add --title \"...\" --link URL Add a reading list entry
  folio reading                      Browse the reading list

Learn more:
  folio <COMMAND> --help             Show detailed help for a command";

#[derive(Parser)]
#[command(name = "folio")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Manage the content of a personal site: posts, works, reading list and page views")]
#[command(
    long_about = "folio manages the content of a personal website. Blog posts, works and \
reading list entries are Markdown files with YAML frontmatter inside the site's content \
directory, so they stay easy to edit and version.

The reading list can be filtered by tag, status, type, source, year and free text, \
either from flags or in an interactive filter panel. Page views are counted per slug \
in a Supabase table or in memory, and can be served over a small HTTP API."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new folio site in the current directory
    #[command(
        long_about = "Initialize a new folio site in the current directory.\n\n\
Creates a .folio configuration file and the content directory structure. \
The configuration file contains all available options with comments.\n\n\
Directory structure created:\n  \
.folio                   Site configuration file\n  \
src/content/blog/        Blog posts\n  \
src/content/works/       Works\n  \
src/content/reading/     Reading list",
        after_help = "Examples:\n  \
folio init                      Initialize in current directory\n  \
cd mysite && folio init         Initialize in a specific site"
    )]
    Init,

    /// Add a reading list entry
    #[command(
        long_about = "Add a reading list entry.\n\n\
Writes a new .mdx file to the reading directory, named after the slugified title \
(or a timestamp when the title has no usable characters). Title and link are \
required, and the link must be an absolute URL. Tags are comma-separated.\n\n\
In interactive mode a step-by-step form collects the fields, prefilled from any \
flags given.",
        after_help = "Examples:\n  \
folio add --title \"Async Rust\" --link https://example.com/async\n  \
folio add --title \"Talk\" --link https://example.com/talk --type video --tags \"rust, talks\"\n  \
folio add -i                               Use the interactive form\n  \
folio add --title \"Notes\" --link URL --edit  Open the new file in your editor\n\n\
Output: Prints the relative path to the created file."
    )]
    Add {
        /// Title of the entry
        #[arg(long)]
        title: Option<String>,

        /// Link to the resource
        #[arg(long)]
        link: Option<String>,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Kind of resource
        #[arg(long = "type", value_enum, default_value = "article")]
        kind: ReadingType,

        /// Reading progress
        #[arg(long, value_enum, default_value = "inbox")]
        status: ReadingStatus,

        /// Where the link came from
        #[arg(long)]
        source: Option<String>,

        /// Author of the resource
        #[arg(long)]
        author: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Open the new file in your editor
        #[arg(short, long)]
        edit: bool,

        /// Force interactive mode
        #[arg(short, long)]
        interactive: bool,

        /// Disable interactive mode
        #[arg(long, conflicts_with = "interactive")]
        no_interactive: bool,
    },

    /// List and filter the reading list
    #[command(
        long_about = "List and filter the reading list, newest first.\n\n\
Every given filter must match. Repeated --tag flags require all of the tags, \
while repeated --status, --type or --source flags accept any of the values. \
The query matches title, description, author, source, type and tags, case-insensitively.\n\n\
In interactive mode the filter panel, search box and result list are shown together; \
picking an entry prints its link and opens its file.",
        after_help = "Examples:\n  \
folio reading                          List everything\n  \
folio reading --tag rust               Items tagged rust\n  \
folio reading --status inbox --type video\n  \
folio reading --year 2024 --group      Items from 2024, grouped by year\n  \
folio reading --query async            Free-text search"
    )]
    Reading {
        /// Free-text search
        #[arg(short, long)]
        query: Option<String>,

        /// Require a tag (can repeat)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Filter by status (can repeat)
        #[arg(long = "status", value_enum)]
        statuses: Vec<ReadingStatus>,

        /// Filter by type (can repeat)
        #[arg(long = "type", value_enum)]
        types: Vec<ReadingType>,

        /// Filter by source (can repeat)
        #[arg(long = "source")]
        sources: Vec<String>,

        /// Only items from this year
        #[arg(long)]
        year: Option<i32>,

        /// Group output by year
        #[arg(short, long)]
        group: bool,

        /// Force interactive mode
        #[arg(short, long)]
        interactive: bool,

        /// Disable interactive mode
        #[arg(long, conflicts_with = "interactive")]
        no_interactive: bool,
    },

    /// List blog posts
    #[command(
        long_about = "List blog posts, newest first.\n\n\
Shows the slug, date, title, category and tags of each post. \
In interactive mode, the picked post is opened in your editor.",
        after_help = "Examples:\n  \
folio posts                        List all posts\n  \
folio posts --tag rust             Posts tagged rust\n  \
folio posts --category notes       Posts in a category"
    )]
    Posts {
        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Force interactive mode
        #[arg(short, long)]
        interactive: bool,

        /// Disable interactive mode
        #[arg(long, conflicts_with = "interactive")]
        no_interactive: bool,
    },

    /// Show a single blog post
    #[command(after_help = "Examples:\n  \
folio post hello-world             Print the post with its metadata")]
    Post {
        /// Slug of the post (file name without extension)
        slug: String,
    },

    /// List works
    Works,

    /// List blog tags
    #[command(after_help = "Examples:\n  \
folio tags                         List all tags\n  \
folio tags --counts                Show post counts per tag")]
    Tags {
        /// Show the number of posts per tag
        #[arg(long)]
        counts: bool,

        /// Force interactive mode
        #[arg(short, long)]
        interactive: bool,

        /// Disable interactive mode
        #[arg(long, conflicts_with = "interactive")]
        no_interactive: bool,
    },

    /// List blog categories
    #[command(after_help = "Examples:\n  \
folio categories                   List all categories\n  \
folio categories --counts          Show post counts per category")]
    Categories {
        /// Show the number of posts per category
        #[arg(long)]
        counts: bool,

        /// Force interactive mode
        #[arg(short, long)]
        interactive: bool,

        /// Disable interactive mode
        #[arg(long, conflicts_with = "interactive")]
        no_interactive: bool,
    },

    /// Generate the sitemap
    #[command(
        long_about = "Generate sitemap XML for the site.\n\n\
Includes the static pages, every blog post and the works page. URLs are built \
from site_url in .folio, or SITE_URL from the environment.",
        after_help = "Examples:\n  \
folio sitemap                          Print to stdout\n  \
folio sitemap --output public/sitemap.xml"
    )]
    Sitemap {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read or record page views
    Views {
        #[command(subcommand)]
        action: ViewsCommand,
    },

    /// Serve the page view API
    #[command(
        long_about = "Serve the page view counter over HTTP.\n\n\
GET /api/views?slug=<slug> returns the current count, POST /api/views with \
{\"slug\": \"...\"} records a view and returns the new count.",
        after_help = "Examples:\n  \
folio serve                            Listen on the configured address\n  \
folio serve --bind 0.0.0.0:8080"
    )]
    Serve {
        /// Listen address (default from .folio)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
folio completions zsh > ~/.zfunc/_folio\n  \
folio completions bash > /etc/bash_completion.d/folio")]
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ViewsCommand {
    /// Print the current count for a slug
    Get {
        /// Page slug
        slug: String,
    },
    /// Record one view and print the new count
    Hit {
        /// Page slug
        slug: String,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "folio=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

const fn interactive(interactive: bool, no_interactive: bool) -> InteractiveArgs {
    InteractiveArgs {
        interactive,
        no_interactive,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init => commands::init(),

        Commands::Add {
            title,
            link,
            description,
            kind,
            status,
            source,
            author,
            tags,
            edit,
            interactive: i,
            no_interactive,
        } => commands::add(&AddArgs {
            title,
            link,
            description,
            kind,
            status,
            source,
            author,
            tags,
            edit,
            interactive: interactive(i, no_interactive),
        }),

        Commands::Reading {
            query,
            tags,
            statuses,
            types,
            sources,
            year,
            group,
            interactive: i,
            no_interactive,
        } => commands::reading(&ReadingArgs {
            query,
            tags,
            statuses,
            types,
            sources,
            year,
            group,
            interactive: interactive(i, no_interactive),
        }),

        Commands::Posts {
            tag,
            category,
            interactive: i,
            no_interactive,
        } => commands::posts(&PostsArgs {
            tag,
            category,
            interactive: interactive(i, no_interactive),
        }),

        Commands::Post { slug } => commands::show_post(&slug),

        Commands::Works => commands::works(),

        Commands::Tags {
            counts,
            interactive: i,
            no_interactive,
        } => commands::tags(&TagsArgs {
            counts,
            interactive: interactive(i, no_interactive),
        }),

        Commands::Categories {
            counts,
            interactive: i,
            no_interactive,
        } => commands::categories(&TagsArgs {
            counts,
            interactive: interactive(i, no_interactive),
        }),

        Commands::Sitemap { output } => commands::sitemap(&SitemapArgs { output }),

        Commands::Views { action } => commands::views(&match action {
            ViewsCommand::Get { slug } => ViewsAction::Get { slug },
            ViewsCommand::Hit { slug } => ViewsAction::Hit { slug },
        }),

        Commands::Serve { bind } => commands::serve(&ServeArgs { bind }),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
