//! Embedded demo catalog.
//!
//! A small concept-art set in the same JSON shape the site ships, so the
//! showcase runs without touching the filesystem.

pub const CATALOG_JSON: &str = r##"{
  "artworks": [
    {
      "id": "neon-core-skyline",
      "title": "NEON CORE SKYLINE",
      "image": "/art/neon-core-skyline.webp",
      "faction": "crowns",
      "description": "Corporate arcologies at dusk, drone lanes threading the towers.",
      "date": "2277.03"
    },
    {
      "id": "lowline-clinic",
      "title": "LOWLINE BLACK CLINIC",
      "image": "/art/lowline-clinic.webp",
      "faction": "hollow_guild",
      "description": "A flooded subway concourse repurposed for implant work.",
      "date": "2277.04"
    },
    {
      "id": "wastefields-solar",
      "title": "CRACKED SOLAR FARM",
      "image": "/art/wastefields-solar.webp",
      "faction": "dust_runners",
      "description": "Sand-scoured panels and a caravan waiting out the storm.",
      "date": "2277.05"
    },
    {
      "id": "skyrail-nest",
      "title": "SKYRAIL RAIDER NEST",
      "image": "/art/skyrail-nest.webp",
      "faction": "volt_cult",
      "description": "A transit spine hung with salvaged relic systems.",
      "date": "2277.06"
    },
    {
      "id": "outlands-lab",
      "title": "ABANDONED BIOTECH LAB",
      "image": "/art/outlands-lab.webp",
      "faction": "crowns",
      "description": "Feral-zone research wing, power still humming somewhere below.",
      "date": "2277.07"
    },
    {
      "id": "nightmarket-gate",
      "title": "NIGHTMARKET GATE",
      "image": "/art/nightmarket-gate.webp",
      "faction": "hollow_guild",
      "description": "The only sanctioned crossing between LOWLINE and the core.",
      "date": "2277.08"
    }
  ],
  "factions": {
    "crowns": { "color": "#c41e3a" },
    "dust_runners": { "color": "#d4a017" },
    "volt_cult": { "color": "#7df9ff" },
    "hollow_guild": { "color": "#9b59b6" }
  }
}"##;
