//! Per-run state and command handlers

use crate::catch::{self, CatchOutcome};
use crate::commands::{Command, CommandKind, CommandRegistry};
use crate::error::Result;
use pokeapi_client::{LocationAreaPage, PokeApiClient, Pokemon};
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::info;

/// Most names printed for one page of location areas
const PAGE_PRINT_LIMIT: usize = 20;

/// What the REPL should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Pagination links of the last location-area page shown
#[derive(Debug, Clone, Default)]
struct PageCursor {
    next: Option<String>,
    previous: Option<String>,
    loaded: bool,
}

/// Everything a run of the pokedex owns: the API client, the caught
/// creatures and where the user is in the location-area listing
pub struct Session {
    client: PokeApiClient,
    pokedex: BTreeMap<String, Pokemon>,
    cursor: PageCursor,
    rng: StdRng,
    catch_animation: bool,
}

impl Session {
    pub fn new(client: PokeApiClient, rng: StdRng, catch_animation: bool) -> Self {
        Self {
            client,
            pokedex: BTreeMap::new(),
            cursor: PageCursor::default(),
            rng,
            catch_animation,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(name)
    }

    pub async fn execute<W: Write>(
        &mut self,
        registry: &CommandRegistry,
        command: &Command,
        arg: Option<&str>,
        out: &mut W,
    ) -> Result<Flow> {
        if command.kind.takes_name() && arg.is_none() {
            writeln!(out, "Usage: {} <name>", command.name)?;
            return Ok(Flow::Continue);
        }

        match (command.kind, arg) {
            (CommandKind::Help, _) => self.help(registry, out)?,
            (CommandKind::Map, _) => self.map(out).await?,
            (CommandKind::MapBack, _) => self.map_back(out).await?,
            (CommandKind::Explore, Some(area)) => self.explore(area, out).await?,
            (CommandKind::Catch, Some(name)) => self.catch(name, out).await?,
            (CommandKind::Inspect, Some(name)) => self.inspect(name, out)?,
            (CommandKind::Pokedex, _) => self.list_pokedex(out)?,
            (CommandKind::Exit, _) => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            (CommandKind::Explore | CommandKind::Catch | CommandKind::Inspect, None) => {}
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, registry: &CommandRegistry, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in registry.iter() {
            writeln!(out, "{}: {}", command.name, command.description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let url = match (&self.cursor.next, self.cursor.loaded) {
            (Some(next), _) => Some(next.clone()),
            (None, false) => None,
            (None, true) => {
                writeln!(out, "you're on the last page")?;
                return Ok(());
            }
        };

        let (page, source) = self.client().location_areas(url.as_deref()).await?;
        info!(%source, "Loaded location areas");
        self.show_page(page, out)
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(previous) = self.cursor.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };

        let (page, source) = self.client().location_areas(Some(&previous)).await?;
        info!(%source, "Loaded location areas");
        self.show_page(page, out)
    }

    fn show_page<W: Write>(&mut self, page: LocationAreaPage, out: &mut W) -> Result<()> {
        self.cursor = PageCursor {
            next: page.next,
            previous: page.previous,
            loaded: true,
        };
        for area in page.results.iter().take(PAGE_PRINT_LIMIT) {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        let (location, source) = self.client.location_area(area).await?;
        info!(area, %source, "Loaded location area");

        writeln!(out, "Exploring {}...", area)?;
        if !location.pokemon_encounters.is_empty() {
            writeln!(out, "Found Pokemon:")?;
        }
        for encounter in &location.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let Some((pokemon, source)) = self.client.pokemon(name).await? else {
            writeln!(out, "That pokemon does not exist.")?;
            return Ok(());
        };
        info!(pokemon = name, %source, "Loaded pokemon");

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let outcome = catch::throw(&mut self.rng, pokemon.total_base_stats());
        if self.catch_animation {
            catch::animate(out).await?;
        }

        match outcome {
            CatchOutcome::Caught => {
                writeln!(out, "{} was caught!", name)?;
                writeln!(out, "You may now inspect it with the inspect command.")?;
                self.pokedex.insert(name.to_string(), pokemon);
            }
            CatchOutcome::Escaped => {
                writeln!(out, "{} escaped!", name)?;
                writeln!(out, "Try Again")?;
            }
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.caught(name) else {
            writeln!(out, "You have not caught that pokemon.")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Empty Pokedex! Catch some pokemons.")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.keys() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
