use log::trace;
use serde_json::{Map, Value};

use crate::{classify::Level, data::Node};

/// Initial state: a JSON object mirroring section nesting.
pub type State = Map<String, Value>;

/// Looks up `key`, treating `null` as missing.
fn provided<'a>(initial: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    initial.get(key).filter(|v| !v.is_null())
}

/// Derive the fully shaped initial state of `items`.
///
/// Every reachable key is present: sections as (possibly empty) objects,
/// variants as their selected option, fields as their initial value or
/// `""`. All variant branches are initialised, not only the selected one,
/// so switching branches later finds its keys and keeps what the other
/// branch held.
///
/// Keys written twice in one scope keep the last value; sections are
/// written first, then variants with their branches, then plain fields.
pub fn derive_state(items: &[Node], initial: &Map<String, Value>) -> State {
    let level = Level::of(items);
    let mut state = State::new();

    for section in &level.sections {
        let empty = Map::new();
        let section_initial = provided(initial, &section.name)
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let inner = derive_state(&section.items, section_initial);
        state.insert(section.name.clone(), Value::Object(inner));
    }

    for variant in &level.variants {
        let selected = provided(initial, &variant.name)
            .cloned()
            .unwrap_or_else(|| Value::String(variant.default_value.clone()));
        state.insert(variant.name.clone(), selected);

        for (option, branch) in &variant.variants {
            trace!("initialising branch `{option}` of variant `{}`", variant.name);
            state.extend(derive_state(branch, initial));
        }
    }

    for field in &level.fields {
        let value = provided(initial, &field.name)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        state.insert(field.name.clone(), value);
    }

    state
}
