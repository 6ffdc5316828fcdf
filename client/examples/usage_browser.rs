use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use clover_client::{
    ClientConfig, Completion, DEFAULT_BASE_URL, Level, SelectionController, SharedData,
    UsageClient, View, load_reference_data,
};
use clover_stats::{Order, SortKey, SpeciesBreakdown, StatsTable, Tab, overview_table};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Table shown for the current selection
enum Display {
    Nothing,
    Overview(StatsTable),
    Species(SpeciesBreakdown),
}

impl Display {
    fn from_view(view: View<'_>) -> Self {
        match view {
            View::Empty => Display::Nothing,
            View::Overview {
                total_teams,
                species,
            } => Display::Overview(overview_table(total_teams, species)),
            View::Species { stats, .. } => Display::Species(SpeciesBreakdown::new(stats)),
        }
    }

    fn table_mut(&mut self) -> Option<&mut StatsTable> {
        match self {
            Display::Nothing => None,
            Display::Overview(table) => Some(table),
            Display::Species(breakdown) => Some(breakdown.active_table_mut()),
        }
    }
}

struct Browser {
    client: UsageClient,
    shared: Arc<SharedData>,
    selection: SelectionController,
    display: Display,
}

impl Browser {
    fn print_options(&self) {
        for level in Level::ALL {
            let selected = self.selection.selection(level).unwrap_or("-");
            let options = self.selection.options(level);
            if options.is_empty() {
                continue;
            }
            println!("{:<7} [{}] {}", level, selected, options.join(" "));
        }
        let species = self.selection.species_options();
        if !species.is_empty() {
            println!(
                "species [{}] {} available",
                self.selection.species().unwrap_or("-"),
                species.len()
            );
        }
    }

    fn print_table(&self) {
        let data = self.shared.snapshot();
        match &self.display {
            Display::Nothing => println!("Select a day to see usage."),
            Display::Overview(table) => {
                println!("{}", self.selection.path());
                println!("{}", table.page().display(&data));
            }
            Display::Species(breakdown) => {
                let tabs: Vec<String> = Tab::ALL
                    .iter()
                    .map(|tab| {
                        if *tab == breakdown.active() {
                            format!("[{}]", tab)
                        } else {
                            tab.to_string()
                        }
                    })
                    .collect();
                let species = self.selection.species().unwrap_or_default();
                println!("{} {}", data.species_name(species), tabs.join(" "));
                println!("{}", breakdown.active_table().page().display(&data));
            }
        }
    }

    async fn choose(&mut self, level: Level, value: &str) {
        match self.selection.choose(&self.client, level, value).await {
            Ok(Some(Completion::Failed)) => println!("Could not load {}", self.selection.path()),
            Ok(_) => {}
            Err(e) => println!("{}", e),
        }
        self.display = Display::from_view(self.selection.view());
    }

    fn select_species(&mut self, id: &str) {
        if let Err(e) = self.selection.select_species(id) {
            println!("{}", e);
            return;
        }
        self.display = Display::from_view(self.selection.view());
    }

    fn select_tab(&mut self, name: &str) {
        let Display::Species(breakdown) = &mut self.display else {
            println!("Tabs need a species");
            return;
        };
        match Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(name))
        {
            Some(tab) => breakdown.select_tab(tab),
            None => println!("Unknown tab: {}", name),
        }
    }

    fn with_table(&mut self, update: impl FnOnce(&mut StatsTable)) {
        match self.display.table_mut() {
            Some(table) => update(table),
            None => println!("No table to change"),
        }
    }

    /// Returns false when the session should end
    async fn handle_input(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or_default();

        match command {
            "" => return true,
            "quit" | "exit" => return false,
            "help" => print_help(),
            "ls" => self.print_options(),
            "show" => self.print_table(),
            "format" | "year" | "month" | "day" => {
                let level = match command {
                    "format" => Level::Format,
                    "year" => Level::Year,
                    "month" => Level::Month,
                    _ => Level::Day,
                };
                self.choose(level, arg).await;
                self.print_options();
            }
            "species" => {
                self.select_species(arg);
                self.print_table();
            }
            "tab" => {
                self.select_tab(arg);
                self.print_table();
            }
            "sort" => {
                let key = match arg {
                    "name" => SortKey::Id,
                    "usage" => SortKey::Usage,
                    "winrate" => SortKey::WinRate,
                    _ => {
                        println!("Sort by name, usage or winrate");
                        return true;
                    }
                };
                self.with_table(|table| match parts.next() {
                    Some("asc") => table.set_sort(key, Order::Asc),
                    Some("desc") => table.set_sort(key, Order::Desc),
                    _ => table.request_sort(key),
                });
                self.print_table();
            }
            "page" => match arg.parse::<usize>() {
                Ok(page) if page > 0 => {
                    self.with_table(|table| table.set_page(page - 1));
                    self.print_table();
                }
                _ => println!("Usage: page <number>"),
            },
            "rows" => match arg.parse::<usize>() {
                Ok(rows) => {
                    self.with_table(|table| {
                        if let Err(e) = table.set_rows_per_page(rows) {
                            println!("{}", e);
                        }
                    });
                    self.print_table();
                }
                Err(_) => println!("Usage: rows <20|40|60|80|100>"),
            },
            _ => println!("Unknown command: {}. Type help for commands", command),
        }
        true
    }
}

fn print_help() {
    println!("Commands:");
    println!("  ls                     list selections and options");
    println!("  format|year|month|day <value>   select, or clear with no value");
    println!("  species <id>           show one species, or the overview with no id");
    println!("  tab <name>             allies, foes, items, abilities, natures, moves");
    println!("  sort <name|usage|winrate> [asc|desc]");
    println!("  page <n>               go to page n");
    println!("  rows <n>               rows per page");
    println!("  show                   print the current table");
    println!("  quit");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    println!("Clover usage browser ({})", base_url);
    let client = UsageClient::new(ClientConfig::with_base_url(base_url))?;
    let shared = Arc::new(SharedData::new());

    let mut selection = SelectionController::new();
    let (report, formats) = tokio::join!(
        load_reference_data(&client, &shared),
        selection.load_formats(&client)
    );
    if !report.is_complete() {
        println!("Some reference data is missing: {:?}", report.failed);
    }
    if formats != Completion::Applied {
        println!("Could not load the format list");
    }

    let mut browser = Browser {
        client,
        shared,
        selection,
        display: Display::Nothing,
    };
    browser.print_options();
    print_help();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if !browser.handle_input(line.trim()).await {
            break;
        }
    }

    Ok(())
}
