//! Console views over the catalog state.
//!
//! Each view is a pure function from state to text, reading the catalog
//! only through its predicates and accessors. Keeping the views pure makes
//! them testable without a store or a terminal.

use dexter_catalog::CatalogState;
use std::fmt::Write;

/// Render the home route: the collection listing plus the current selection.
///
/// A pending fetch renders a loading notice and an unsettled failure
/// renders its message, mirroring the listing slot's status.
#[must_use]
pub fn render_home(state: &CatalogState) -> String {
    if state.is_list_loading() {
        return "Loading pokemons...\n".to_string();
    }
    if let Some(message) = state.list_error() {
        return format!("Error: {message}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Poke API");
    let _ = writeln!(out);
    if let Some(name) = state.selected_name() {
        let _ = writeln!(out, "Selected pokemon: {name}");
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "Pokemons:");
    for entry in state.list_entries() {
        let marker = if state.selected_name() == Some(entry.name.as_str()) {
            ">"
        } else {
            " "
        };
        let _ = writeln!(out, " {marker} {}", entry.name);
    }
    out
}

/// Render the detail route for the pokemon named by the route parameter.
///
/// Height and weight arrive in decimetres and hectograms and are shown in
/// metres and kilograms.
#[must_use]
pub fn render_details(state: &CatalogState, name: &str) -> String {
    if state.is_details_loading() {
        return format!("Searching {name}...\nLoading details...\n");
    }
    if let Some(message) = state.details_error() {
        return format!("Error: {message}\nType 'back' to return to the list.\n");
    }
    let Some(pokemon) = state.current_details() else {
        return "Pokemon not found.\nType 'back' to return to the list.\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", pokemon.name.to_uppercase());
    let _ = writeln!(out);
    if let Some(sprite) = pokemon.sprites.front_default.as_deref() {
        let _ = writeln!(out, "sprite: {sprite}");
    }
    let _ = writeln!(out, "id: #{}", pokemon.id);
    let _ = writeln!(out, "height: {} m", f64::from(pokemon.height) / 10.0);
    let _ = writeln!(out, "weight: {} kg", f64::from(pokemon.weight) / 10.0);
    let types = pokemon.type_names().collect::<Vec<_>>().join(", ");
    let _ = writeln!(out, "types: {types}");
    let abilities = pokemon.ability_names().collect::<Vec<_>>().join(", ");
    let _ = writeln!(out, "abilities: {abilities}");
    let _ = writeln!(out, "stats:");
    for stat in &pokemon.stats {
        let _ = writeln!(out, "  {}: {}", stat.stat.name, stat.base_stat);
    }
    out
}
