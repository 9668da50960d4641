//! List composition: one item template applied per element, folded into a
//! parent template under the `<itemKey>Items` slot.

use serde_json::{Map, Value};

use super::substitution::substitute;

/// Compose a list section from an item template and a parent template.
///
/// Each element of `items` is substituted into `item_template` under the
/// `item_key` name, in sequence order, and the results are concatenated
/// with no separator; separators, if wanted, belong inside the item
/// template. The concatenated fragment is then substituted into
/// `parent_template` under the conventional `<item_key>Items` key.
///
/// An empty `items` slice still supplies the `...Items` key, so the
/// parent's list slot resolves to the empty string rather than surviving
/// as an unresolved marker.
pub fn compose_list(
    item_template: &str,
    parent_template: &str,
    items: &[Value],
    item_key: &str,
) -> String {
    let mut fragment = String::new();
    for item in items {
        let mut scope = Map::new();
        scope.insert(item_key.to_string(), item.clone());
        fragment.push_str(&substitute(item_template, &Value::Object(scope)));
    }

    let mut parent_scope = Map::new();
    parent_scope.insert(format!("{}Items", item_key), Value::String(fragment));
    substitute(parent_template, &Value::Object(parent_scope))
}
