//! Item stats from `Infobox Item` and `Infobox Bonuses`
//!
//! Multi-version items carry one column per version (`dstab1`, `dstab2`) next
//! to, or instead of, the plain key. [`var_int`] picks the highest-numbered
//! version that has a non-zero value.

use serde::Serialize;
use indexmap::IndexMap;
use tracing::{debug, info};

use super::config::TemplatesConfig;
use super::error::DumpError;
use super::items::{unique_names, ItemRecord};
use super::pages::PageSource;
use crate::wiki::{parse_template, Template};

/// Equipment inventory slots, numbered as in the client's equipment container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentSlot {
    Head,
    Cape,
    Amulet,
    Weapon,
    Body,
    Shield,
    Legs,
    Gloves,
    Boots,
    Ring,
    Ammo,
}

impl EquipmentSlot {
    pub fn index(self) -> i32 {
        match self {
            EquipmentSlot::Head => 0,
            EquipmentSlot::Cape => 1,
            EquipmentSlot::Amulet => 2,
            EquipmentSlot::Weapon => 3,
            EquipmentSlot::Body => 4,
            EquipmentSlot::Shield => 5,
            EquipmentSlot::Legs => 7,
            EquipmentSlot::Gloves => 9,
            EquipmentSlot::Boots => 10,
            EquipmentSlot::Ring => 12,
            EquipmentSlot::Ammo => 13,
        }
    }

    /// Map the infobox `slot` value (`2h`, `Feet`, `Neck`, ...) to a slot.
    pub fn from_wiki_name(name: &str) -> Option<Self> {
        let slot = match name.to_lowercase().as_str() {
            // TODO: 2h occupies the shield slot as well; the index format has no way to say so.
            "weapon" | "2h" => EquipmentSlot::Weapon,
            "body" => EquipmentSlot::Body,
            "head" => EquipmentSlot::Head,
            "ammo" => EquipmentSlot::Ammo,
            "legs" => EquipmentSlot::Legs,
            "feet" => EquipmentSlot::Boots,
            "hands" => EquipmentSlot::Gloves,
            "cape" => EquipmentSlot::Cape,
            "neck" => EquipmentSlot::Amulet,
            "ring" => EquipmentSlot::Ring,
            "shield" => EquipmentSlot::Shield,
            _ => return None,
        };
        Some(slot)
    }
}

/// Bonuses of an equipable item. `slot` is `-1` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemEquipmentStats {
    pub slot: i32,

    pub astab: i32,
    pub aslash: i32,
    pub acrush: i32,
    pub amagic: i32,
    pub arange: i32,

    pub dstab: i32,
    pub dslash: i32,
    pub dcrush: i32,
    pub dmagic: i32,
    pub drange: i32,

    pub str: i32,
    pub rstr: i32,
    pub mdmg: i32,
    pub prayer: i32,
    pub aspeed: i32,
}

impl Default for ItemEquipmentStats {
    fn default() -> Self {
        Self {
            slot: -1,
            astab: 0,
            aslash: 0,
            acrush: 0,
            amagic: 0,
            arange: 0,
            dstab: 0,
            dslash: 0,
            dcrush: 0,
            dmagic: 0,
            drange: 0,
            str: 0,
            rstr: 0,
            mdmg: 0,
            prayer: 0,
            aspeed: 0,
        }
    }
}

impl ItemEquipmentStats {
    pub fn from_template(bonuses: &Template) -> Self {
        Self {
            slot: bonuses
                .value("slot")
                .and_then(|name| EquipmentSlot::from_wiki_name(&name))
                .map_or(-1, EquipmentSlot::index),
            astab: var_int(bonuses, "astab"),
            aslash: var_int(bonuses, "aslash"),
            acrush: var_int(bonuses, "acrush"),
            amagic: var_int(bonuses, "amagic"),
            arange: var_int(bonuses, "arange"),
            dstab: var_int(bonuses, "dstab"),
            dslash: var_int(bonuses, "dslash"),
            dcrush: var_int(bonuses, "dcrush"),
            dmagic: var_int(bonuses, "dmagic"),
            drange: var_int(bonuses, "drange"),
            str: var_int(bonuses, "str"),
            rstr: var_int(bonuses, "rstr"),
            mdmg: var_int(bonuses, "mdmg"),
            prayer: var_int(bonuses, "prayer"),
            aspeed: var_int(bonuses, "aspeed"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemStats {
    pub quest: bool,
    pub equipable: bool,
    pub weight: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<ItemEquipmentStats>,
}

impl ItemStats {
    /// Read stats from an item page. `None` when the page has no item infobox.
    pub fn from_page(page: &str, templates: &TemplatesConfig) -> Option<Self> {
        let base = parse_template(&templates.item, page)?;

        let mut stats = ItemStats {
            quest: base.boolean("quest").unwrap_or(false),
            equipable: base.boolean("equipable").unwrap_or(false),
            weight: base.double("weight").unwrap_or(0.0),
            equipment: None,
        };

        if stats.equipable {
            stats.equipment = parse_template(&templates.bonuses, page)
                .map(|bonuses| ItemEquipmentStats::from_template(&bonuses))
                .filter(|equipment| !equipment.is_empty());
        }

        Some(stats)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// First present value of `<key>2`, `<key>1`, `<key>`, or `0`.
///
/// Relies on [`Template::integer`] reporting zero as missing, so a `0` in a
/// higher version slot falls through to the next one.
pub fn var_int(template: &Template, key: &str) -> i32 {
    [format!("{key}2"), format!("{key}1"), key.to_string()]
        .iter()
        .find_map(|candidate| template.integer(candidate))
        .unwrap_or(0)
}

/// Stats for every item whose page carries a non-default item infobox.
pub fn dump_item_stats<S>(
    items: &[ItemRecord],
    pages: &S,
    templates: &TemplatesConfig,
) -> Result<IndexMap<String, ItemStats>, DumpError>
where
    S: PageSource + ?Sized,
{
    let mut dumped = IndexMap::new();

    for (id, name) in unique_names(items) {
        let page = match pages.page(&name)? {
            Some(page) if !page.is_empty() => page,
            _ => {
                debug!(id, name = %name, "no page");
                continue;
            }
        };

        let Some(stats) = ItemStats::from_page(&page, templates) else {
            debug!(id, name = %name, template = %templates.item, "no infobox");
            continue;
        };

        if stats.is_default() {
            debug!(id, name = %name, "default stats");
            continue;
        }

        info!(id, name = %name, "dumped item stats");
        dumped.insert(name, stats);
    }

    Ok(dumped)
}
