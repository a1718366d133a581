use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use gildedrose_core::{Item, LEGENDARY_QUALITY};
use gildedrose_inventory::GildedRose;

#[derive(Parser, Debug)]
#[command(
    name = "gildedrose",
    about = "Advance the Gilded Rose inventory by whole days and print the result",
    version
)]
pub struct Args {
    /// Number of days to simulate before printing (0 prints the starting inventory)
    #[arg(long, default_value_t = 1)]
    pub days: u32,

    /// Item as "<name>, <sell_in>, <quality>"; repeat to build the inventory (replaces the starter set)
    #[arg(long = "item", value_name = "ITEM")]
    pub items: Vec<String>,

    /// Print the inventory after every simulated day, not only the last
    #[arg(long)]
    pub every_day: bool,

    /// Print each snapshot as one compact JSON array per line instead of text
    #[arg(long)]
    pub json: bool,

    /// Emit log lines (stderr) as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Inventory used when no `--item` is given.
pub fn starter_items() -> Vec<Item> {
    vec![
        Item::new("Aged Brie", 2, 0),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Normal Item", 10, 20),
        Item::new("Sulfuras, Hand of Ragnaros", 0, LEGENDARY_QUALITY),
    ]
}

impl Args {
    /// Items to simulate, in argument order.
    pub fn inventory(&self) -> Result<Vec<Item>> {
        if self.items.is_empty() {
            return Ok(starter_items());
        }
        self.items
            .iter()
            .map(|raw| {
                raw.parse::<Item>()
                    .with_context(|| format!("parsing --item {raw:?}"))
            })
            .collect()
    }
}

/// Simulate `args.days` days and write the requested snapshots to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let mut items = args.inventory()?;
    tracing::info!(items = items.len(), days = args.days, "starting simulation");

    let mut gr = GildedRose::new(&mut items);
    for day in 1..=args.days {
        gr.update_quality();
        tracing::debug!(day, "day complete");
        if args.every_day && day < args.days {
            write_snapshot(&gr, args.json, out)?;
        }
    }
    write_snapshot(&gr, args.json, out)?;
    out.flush().context("flushing output")
}

fn write_snapshot<W: Write>(gr: &GildedRose<'_>, json: bool, out: &mut W) -> Result<()> {
    if json {
        let line = serde_json::to_string(gr.items()).context("serializing inventory")?;
        writeln!(out, "{line}").context("writing inventory")
    } else {
        gr.write_items(out).context("writing inventory")
    }
}

/// Whether `err` was caused by the reader closing our output (e.g. `| head`).
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|cause| cause.kind() == io::ErrorKind::BrokenPipe)
}
