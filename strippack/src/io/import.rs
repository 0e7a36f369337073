use crate::entities::{Item, SPInstance, Strip};
use crate::io::ext_repr::{ExtItem, ExtSPInstance};
use anyhow::{Context, Result, bail, ensure};
use log::warn;

/// Imports an instance into the library.
/// The strip width defined in the instance takes precedence over `default_strip_width`.
pub fn import(ext_instance: &ExtSPInstance, default_strip_width: i32) -> Result<SPInstance> {
    let strip_width = match ext_instance.strip_width {
        Some(width) => {
            if width != default_strip_width {
                warn!(
                    "instance {} defines a strip width of {width}, overriding the configured {default_strip_width}",
                    ext_instance.name
                );
            }
            width
        }
        None => default_strip_width,
    };
    let strip = Strip::new(strip_width)?;

    let items = ext_instance
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<Item>>>()?;

    SPInstance::new(ext_instance.name.clone(), items, strip)
}

fn import_item(ext_item: &ExtItem) -> Result<Item> {
    ensure!(
        ext_item.width > 0 && ext_item.height > 0,
        "item {} has invalid dimensions: {}x{}",
        ext_item.id,
        ext_item.width,
        ext_item.height
    );
    let id = usize::try_from(ext_item.id)
        .with_context(|| format!("item id {} is out of range", ext_item.id))?;
    Ok(Item::new(id, ext_item.width, ext_item.height))
}

/// Parses the whitespace-delimited text format: the number of items, followed by an
/// `id width height` triple for every item.
pub fn parse_text_instance(name: &str, content: &str) -> Result<ExtSPInstance> {
    let mut tokens = content.split_whitespace();

    let n_items: usize = match tokens.next() {
        Some(token) => token
            .parse()
            .with_context(|| format!("invalid item count: {token:?}"))?,
        None => bail!("instance {name} is empty"),
    };

    let mut next_number = |field: &str, index: usize| -> Result<i64> {
        let token = tokens.next().with_context(|| {
            format!("expected {n_items} items, but the {field} of item #{index} is missing")
        })?;
        token
            .parse::<i64>()
            .with_context(|| format!("invalid {field} of item #{index}: {token:?}"))
    };

    //the item count is untrusted, every item takes at least three tokens
    let mut items = Vec::with_capacity(n_items.min(content.len() / 3));
    for index in 0..n_items {
        let id = next_number("id", index)?;
        let width = next_number("width", index)?;
        let height = next_number("height", index)?;
        items.push(ExtItem {
            id: u64::try_from(id).with_context(|| format!("negative id for item #{index}"))?,
            width: i32::try_from(width).with_context(|| format!("width of item #{index}"))?,
            height: i32::try_from(height).with_context(|| format!("height of item #{index}"))?,
        });
    }

    if tokens.next().is_some() {
        warn!("instance {name} contains trailing data after {n_items} items, ignoring it");
    }

    Ok(ExtSPInstance {
        name: name.to_string(),
        strip_width: None,
        items,
    })
}
