//! REPL commands
//!
//! The command table and the per-session state the commands act on.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::client::PokeClient;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaPage, Pokemon};
use crate::repl::catch::{attempt_catch, MIN_BASE_EXPERIENCE};
use crate::repl::input::clean_input;

// == Command ==
/// A REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the next page of location areas",
            Command::Mapb => "Displays the previous page of location areas",
            Command::Explore => "Lists the pokemon in a location area, e.g. explore <area>",
            Command::Catch => "Attempts to catch a pokemon, e.g. catch <pokemon>",
            Command::Inspect => "Shows details of a caught pokemon, e.g. inspect <pokemon>",
            Command::Pokedex => "Lists every pokemon you have caught",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a word does not name a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Whether the REPL should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// State carried between commands: pagination cursors and caught pokemon.
#[derive(Debug)]
pub struct Session {
    client: PokeClient,
    next: Option<String>,
    previous: Option<String>,
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    pub fn new(client: PokeClient) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }

    /// Creates a session with a caller-supplied RNG, for reproducible catches.
    pub fn with_rng(client: PokeClient, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    // == Dispatch ==
    /// Runs one line of user input.
    ///
    /// Command failures are returned to the caller, which reports them and
    /// keeps the loop going.
    pub async fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        match name.parse::<Command>() {
            Ok(command) => self.execute(command, args, out).await,
            Err(UnknownCommand(name)) => {
                debug!(command = %name, "Unknown command");
                writeln!(out, "Unknown command")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        debug!(%command, ?args, "Executing command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::Mapb => self.mapb(out).await?,
            Command::Explore => {
                let area = first_arg(args, "a location area name")?;
                self.explore(area, out).await?;
            }
            Command::Catch => {
                let name = first_arg(args, "a pokemon name")?;
                self.catch(name, out).await?;
            }
            Command::Inspect => {
                let name = first_arg(args, "a pokemon name")?;
                self.inspect(name, out)?;
            }
            Command::Pokedex => self.list_pokedex(out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "Welcome to the Pokedex!\nUsage:\n\n")?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        // Past the last page `next` is unset, so this wraps to the first page
        let page = self.client.location_areas(self.next.as_deref()).await?;
        self.show_page(page, out)
    }

    async fn mapb<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(previous) = self.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };

        let page = self.client.location_areas(Some(&previous)).await?;
        self.show_page(page, out)
    }

    fn show_page<W: Write>(&mut self, page: LocationAreaPage, out: &mut W) -> Result<()> {
        self.next = page.next;
        self.previous = page.previous;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let names = self.client.pokemon_in_area(area).await?;

        if names.is_empty() {
            writeln!(out, "No pokemon found")?;
            return Ok(());
        }

        writeln!(out, "Found Pokemon:")?;
        for name in names {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = match self.client.pokemon(name).await {
            Ok(pokemon) => pokemon,
            Err(PokedexError::PokemonNotFound(_)) => {
                writeln!(out, "Pokemon {} does not exist", name)?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        let base_experience = pokemon.base_experience.unwrap_or(MIN_BASE_EXPERIENCE);
        if attempt_catch(base_experience, &mut self.rng) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.keys() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}

fn first_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(what))
}
