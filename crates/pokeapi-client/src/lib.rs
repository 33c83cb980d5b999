//! Rust client for the PokeAPI
//!
//! Every request goes through a [`ttl_cache::Cache`] keyed by URL: a hit is
//! served from memory, a miss is fetched over HTTP and stored with the raw
//! response body.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use pokeapi_client::PokeApiClient;
//! use ttl_cache::Cache;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = Cache::new(Duration::from_secs(10))?;
//! let client = PokeApiClient::new(cache)?;
//!
//! let (page, _) = client.location_areas(None).await?;
//! for area in page.results {
//!     println!("{}", area.name);
//! }
//!
//! if let Some((pokemon, _)) = client.pokemon("pikachu").await? {
//!     println!("{} has {} total base stats", pokemon.name, pokemon.total_base_stats());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /location-area/` - Paginated location areas
//! - `GET /location-area/{name}` - Creatures encountered in an area
//! - `GET /pokemon/{name}` - Creature details

mod client;
mod error;
mod types;

pub use client::{FetchSource, Fetched, PokeApiClient};
pub use error::{PokeApiError, Result};
pub use types::{
    LocationArea, LocationAreaPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonType,
};
