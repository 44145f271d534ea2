use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pkread::{
    gci::GciFile,
    save::{CartridgeTitle, SaveFile},
    transfer::{self, TransferCandidate},
    Pokemon, TransferDirection,
};

#[derive(Parser)]
struct Opts {
    #[command(subcommand)]
    tool: ToolOpts,
}

#[derive(Subcommand)]
enum ToolOpts {
    /// Inspect a cartridge save.
    Cartridge(CartridgeOpts),
    /// Inspect a memory card export.
    Gci(GciOpts),
    /// Check which records from a cartridge save or memory card export can be transferred.
    Check(CheckOpts),
}

#[derive(Debug, Args)]
struct CartridgeOpts {
    #[arg(short, long)]
    sav: PathBuf,
    /// `party`, `all`, or `box<N>` with N from 1 to 14.
    #[arg(short, long, default_value = "party")]
    location: String,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct GciOpts {
    #[arg(short, long)]
    file: PathBuf,
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Direction {
    ToConsole,
    ToCartridge,
}

impl From<Direction> for TransferDirection {
    fn from(value: Direction) -> Self {
        match value {
            Direction::ToConsole => TransferDirection::CartridgeToConsole,
            Direction::ToCartridge => TransferDirection::ConsoleToCartridge,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Destination {
    Ruby,
    Sapphire,
    Emerald,
    Firered,
    Leafgreen,
}

impl From<Destination> for CartridgeTitle {
    fn from(value: Destination) -> Self {
        match value {
            Destination::Ruby => CartridgeTitle::Ruby,
            Destination::Sapphire => CartridgeTitle::Sapphire,
            Destination::Emerald => CartridgeTitle::Emerald,
            Destination::Firered => CartridgeTitle::FireRed,
            Destination::Leafgreen => CartridgeTitle::LeafGreen,
        }
    }
}

#[derive(Debug, Args)]
struct CheckOpts {
    #[arg(short, long, required_unless_present = "gci", conflicts_with = "gci")]
    sav: Option<PathBuf>,
    #[arg(short, long)]
    gci: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "to-console")]
    direction: Direction,
    /// Cartridge title receiving the records, checked for version exclusives.
    #[arg(long, value_enum, requires = "gci")]
    destination: Option<Destination>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    match opts.tool {
        ToolOpts::Cartridge(opts) => run_cartridge(opts),
        ToolOpts::Gci(opts) => run_gci(opts),
        ToolOpts::Check(opts) => run_check(opts),
    }
}

fn run_cartridge(opts: CartridgeOpts) -> anyhow::Result<()> {
    let save_file = SaveFile::from_path(&opts.sav)
        .with_context(|| format!("Failed to load save {}", opts.sav.display()))?;
    for failure in save_file.checksum_failures() {
        log::warn!("{failure}");
    }

    if opts.json {
        let output = match opts.location.as_str() {
            "party" => serde_json::to_string_pretty(&save_file.get_party())?,
            "all" => serde_json::to_string_pretty(&serde_json::json!({
                "trainer_info": save_file.trainer_info(),
                "game_family": save_file.game_family(),
                "slot_used": save_file.slot_used(),
                "party": save_file.get_party(),
                "boxes": save_file.get_boxes(),
            }))?,
            location => serde_json::to_string_pretty(&save_file.get_box(parse_box(location)?))?,
        };
        println!("{output}");
        return Ok(());
    }

    match save_file.trainer_info() {
        Some(trainer_info) => println!(
            "Trainer: {} ({:?}) ID {:05} | {:?} | slot {:?}",
            trainer_info.player_name,
            trainer_info.player_gender,
            trainer_info.id.public_id,
            save_file.game_family(),
            save_file.slot_used()
        ),
        None => println!("Trainer: unknown | slot {:?}", save_file.slot_used()),
    }

    match opts.location.as_str() {
        "party" => print_party(&save_file.get_party()),
        "all" => {
            print_party(&save_file.get_party());
            for pc_box in save_file.get_boxes() {
                if pc_box.pokemon.is_empty() {
                    continue;
                }
                println!("{}:", pc_box.name);
                for (slot, pkmn) in &pc_box.pokemon {
                    println!("  Slot {slot}: {}", describe(pkmn));
                }
            }
        }
        location => {
            let box_number = parse_box(location)?;
            let Some(pc_box) = save_file.get_box(box_number) else {
                bail!("No box {box_number}");
            };
            println!("{}:", pc_box.name);
            for (slot, pkmn) in &pc_box.pokemon {
                println!("  Slot {slot}: {}", describe(pkmn));
            }
        }
    }

    Ok(())
}

fn run_gci(opts: GciOpts) -> anyhow::Result<()> {
    let gci = GciFile::from_path(&opts.file)
        .with_context(|| format!("Failed to load memory card file {}", opts.file.display()))?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&gci)?);
        return Ok(());
    }

    println!(
        "{} [{}] {:?} \"{}\" ({} blocks)",
        gci.title,
        gci.header.game_id_string(),
        gci.region,
        gci.header.filename,
        gci.header.block_count
    );
    if let Some(trainer_info) = &gci.trainer_info {
        println!(
            "Trainer: {} ID {:05} | {}h {:02}m",
            trainer_info.name, trainer_info.id, trainer_info.hours, trainer_info.minutes
        );
    }
    for record in &gci.party {
        let shadow = if record.is_shadow {
            format!(" [shadow {}]", record.shadow_level)
        } else {
            String::new()
        };
        println!(
            "  {} Lv.{} {}{shadow} | {}",
            record.display_name(),
            record.level,
            record.nature,
            record.move_names.join(", ")
        );
    }

    Ok(())
}

fn run_check(opts: CheckOpts) -> anyhow::Result<()> {
    let direction = TransferDirection::from(opts.direction);

    let candidates: Vec<(String, TransferCandidate)> = match (&opts.sav, &opts.gci) {
        (_, Some(gci_path)) => GciFile::from_path(gci_path)
            .with_context(|| format!("Failed to load memory card file {}", gci_path.display()))?
            .party
            .iter()
            .map(|record| (record.display_name(), TransferCandidate::from(record)))
            .collect(),
        (Some(sav_path), None) => SaveFile::from_path(sav_path)
            .with_context(|| format!("Failed to load save {}", sav_path.display()))?
            .all_pokemon()
            .iter()
            .map(|pkmn| (pkmn.display_name(), TransferCandidate::from(pkmn)))
            .collect(),
        (None, None) => bail!("Either --sav or --gci is required"),
    };

    for (name, candidate) in &candidates {
        let verdict = match opts.destination {
            Some(destination) => {
                transfer::evaluate_for_destination(candidate, destination.into())
            }
            None => transfer::evaluate(candidate, direction),
        };
        println!("{name}: {verdict}");
    }

    Ok(())
}

fn parse_box(location: &str) -> anyhow::Result<u8> {
    let Some(number) = location.strip_prefix("box") else {
        bail!("Unknown location {location:?}, expected party, all or box<N>");
    };
    number
        .parse::<u8>()
        .with_context(|| format!("Invalid box number in {location:?}"))
}

fn print_party(party: &[Pokemon]) {
    println!("Party:");
    for pkmn in party {
        println!("  {}", describe(pkmn));
    }
}

fn describe(pkmn: &Pokemon) -> String {
    let shiny = if pkmn.is_shiny { " *" } else { "" };
    format!(
        "{} Lv.{} {} {:?}{shiny} | {} | {}",
        pkmn.display_name(),
        pkmn.level,
        pkmn.nature,
        pkmn.gender,
        pkmn.item_name,
        pkmn.move_names.join(", ")
    )
}
