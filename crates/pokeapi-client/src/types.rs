//! Data types for PokeAPI responses
//!
//! Only the fields the pokedex uses are mapped; everything else in the
//! payloads is ignored.

use serde::Deserialize;

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `/location-area/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Location area detail from `/location-area/{name}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Creature detail from `/pokemon/{name}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Sum of every base stat; the catch difficulty
    pub fn total_base_stats(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_area_page_first() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_location_area_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.pokemon_encounters.len(), 1);
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
    }

    #[test]
    fn test_pokemon_total_base_stats() {
        let json = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [
                {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 45, "effort": 0, "stat": {"name": "attack", "url": ""}},
                {"base_stat": 56, "effort": 1, "stat": {"name": "speed", "url": ""}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "normal", "url": ""}},
                {"slot": 2, "type": {"name": "flying", "url": ""}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.total_base_stats(), 141);
        assert_eq!(pokemon.types[1].kind.name, "flying");
        assert_eq!(pokemon.base_experience, Some(50));
    }

    #[test]
    fn test_pokemon_null_base_experience() {
        let json = r#"{"name": "koraidon-limited-build", "base_experience": null}"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.base_experience, None);
        assert_eq!(pokemon.total_base_stats(), 0);
    }
}
