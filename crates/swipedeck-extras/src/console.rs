#![forbid(unsafe_code)]

//! The archive console: a lookup-table command interpreter.
//!
//! No parsing grammar. Input is trimmed and case-folded, then matched
//! exactly against the command table; there are no arguments. Unknown input
//! produces a fixed not-found transcript, `clear` empties the transcript,
//! and empty input echoes a blank line.
//!
//! Submitted inputs (raw, before folding) are kept in a history the UI
//! walks with the arrow keys.

use tracing::debug;

/// Display class of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command.
    Command,
    /// Regular output.
    Output,
    /// Not-found and other error text.
    Error,
    /// Headers and status banners.
    System,
}

/// One line of the console transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Display class.
    pub kind: LineKind,
    /// Line content, already formatted.
    pub content: String,
}

impl TranscriptLine {
    /// An [`Output`](LineKind::Output) line.
    #[must_use]
    pub fn output(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            content: content.into(),
        }
    }

    /// A [`System`](LineKind::System) line.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::System,
            content: content.into(),
        }
    }

    /// An [`Error`](LineKind::Error) line.
    #[must_use]
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            content: content.into(),
        }
    }

    /// A [`Command`](LineKind::Command) echo line.
    #[must_use]
    pub fn command(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Command,
            content: content.into(),
        }
    }
}

/// Commands surfaced as quick-access buttons in the UI.
pub const QUICK_COMMANDS: [&str; 4] = ["help", "dir", "world", "signals"];

/// World lexicon transmitted by the `lexicon` command.
const LEXICON_WORDS: [&str; 48] = [
    "ASHFALL", "BLACKOUT", "CHOKEPATH", "DUSTLINE", "ECHOFIELD", "GUTTERGRID",
    "NEONFALL", "NIGHTMARKET", "SHADOWPORT", "SCRAPWIND", "GLASSHARBOR", "RUSTTIDE",
    "VOIDLANE", "CIRCUITDAWN", "GHOSTSTACK", "FRACTUREGATE", "STATICBLOOM", "CINDERZONE",
    "DRIFTFUEL", "SALVAGERUN", "NOMADLINE", "QUARANTINE", "HELIXFARM", "SILTDOCK",
    "OVERFLOW", "RAILHOLLOW", "VOLTLOCK", "HARDLIGHT", "COLDPATCH", "THREADCACHE",
    "SKYVAULT", "DEADCITY", "STORMCUT", "GLITCHWELL", "BLACKICE", "RIPCORD",
    "COALTRAIL", "HOLLOWSTACK", "RADIRIDGE", "IRONVEIL", "DATARUIN", "ASHENWAY",
    "FARLIGHT", "WRAITHNET", "GLASSWALK", "SALTCRACK", "EMBERZONE", "BLOODNODE",
];

/// Boot banner revealed line by line when the console mounts.
#[must_use]
pub fn boot_lines() -> Vec<TranscriptLine> {
    vec![
        TranscriptLine::system(">>>TERMINAL.EXE v3.9.1"),
        TranscriptLine::system("AI.RELAY: ACTIVE | NODE: D-77"),
        TranscriptLine::output(""),
        TranscriptLine::system("INITIALIZING: SYNTHETIX.RELAY"),
        TranscriptLine::output(""),
        TranscriptLine::output("Type \"help\" or tap a quick command to begin"),
    ]
}

fn lexicon_lines() -> Vec<TranscriptLine> {
    let mut lines = vec![
        TranscriptLine::system("LEXICON.SEED.TRANSMIT"),
        TranscriptLine::output(""),
    ];
    lines.extend(
        LEXICON_WORDS
            .chunks(4)
            .map(|group| TranscriptLine::output(format!("LEXICON> {}", group.join("  ")))),
    );
    lines
}

fn dir_lines() -> Vec<TranscriptLine> {
    let mut lines = vec![TranscriptLine::system("ARCHIVE.ROOT/")];
    for node in [
        "  world/", "  regions/", "  survival/", "  systems/", "  factions/",
        "  wildlife/", "  ruins/", "  comms/", "  lexicon.txt",
    ] {
        lines.push(TranscriptLine::output(node));
    }
    lines
}

fn section(header: &str, body: &[&str]) -> Vec<TranscriptLine> {
    let mut lines = vec![TranscriptLine::system(header)];
    lines.extend(body.iter().map(|line| TranscriptLine::output(*line)));
    lines
}

/// Resolve a folded token against the command table.
///
/// Exact match only; `clear` and empty input are handled by the console
/// itself, not here.
#[must_use]
pub fn builtin(token: &str) -> Option<Vec<TranscriptLine>> {
    match token {
        "help" => Some(section(
            "COMMAND.INDEX:",
            &[
                "  dir          - List archive nodes",
                "  lexicon      - Transmit world lexicon",
                "  world        - Open world overview",
                "  regions      - Known districts and zones",
                "  survival     - Core survival loop",
                "  systems      - Simulation stack",
                "  factions     - Major powers",
                "  signals      - AI relay status",
                "  clear        - Clear terminal",
            ],
        )),
        "dir" | "ls" => Some(dir_lines()),
        "lexicon" => Some(lexicon_lines()),
        "world" => Some(section(
            "WORLD.OVERVIEW",
            &[
                "Open-world survival across a collapsed megacity and its dead zones.",
                "Day-night cycles shift threat density, power access, and faction patrols.",
                "Urban towers, subsurface tunnels, and wasteland outskirts are fully explorable.",
                "Player choices reshape district control, trade routes, and safehouse grids.",
            ],
        )),
        "regions" => Some(section(
            "REGION.MAP",
            &[
                "NEON CORE - corporate arcologies, vertical markets, drone lanes",
                "LOWLINE - slums, salvage yards, black clinics, flooded subways",
                "WASTEFIELDS - cracked solar farms, sand storms, hidden bunkers",
                "SKYRAIL - suspended transit spines, raider nests, wind hazards",
                "OUTLANDS - abandoned labs, biotech ruins, feral zones",
            ],
        )),
        "survival" => Some(section(
            "SURVIVAL.LOOP",
            &[
                "Hydration, heat, and radiation force constant route planning.",
                "Scavenge components to craft gear, shelters, and signal beacons.",
                "Hunt, trade, or raid to keep food and fuel stable.",
                "Safehouses act as respawn nodes and dynamic storage caches.",
            ],
        )),
        "systems" => Some(section(
            "SIMULATION.STACK",
            &[
                "Dynamic weather fronts, electrical storms, and blackout events.",
                "Faction reputation unlocks traversal perks and underground markets.",
                "Stealth, hacking, and traversal upgrades shape build identity.",
                "Mission generator pulls from district states and active threats.",
            ],
        )),
        "factions" => Some(section(
            "FACTION.REGISTRY",
            &[
                "THE CROWNS - corporate enforcers guarding power nodes.",
                "DUST_RUNNERS - nomads controlling salvage routes and caravans.",
                "VOLT_CULT - tech zealots weaponizing relic systems.",
                "HOLLOW_GUILD - smugglers trading data, implants, and illicit maps.",
            ],
        )),
        "signals" => Some(section(
            "AI.RELAY.STATUS",
            &[
                "AI_BOT: Online. Awaiting query tokens.",
                "AI_BOT: Route requests through /comms and /regions.",
                "AI_BOT: Use \"lexicon\" for current terminology keys.",
            ],
        )),
        _ => None,
    }
}

/// One console instance: transcript plus submitted-input history.
#[derive(Debug, Clone, Default)]
pub struct Console {
    transcript: Vec<TranscriptLine>,
    history: Vec<String>,
    cursor: Option<usize>,
}

impl Console {
    /// Create an empty console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current transcript.
    #[must_use]
    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    /// Append a line directly (used by the boot reveal).
    pub fn push_line(&mut self, line: TranscriptLine) {
        self.transcript.push(line);
    }

    /// Submitted inputs, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Submit a line of input.
    ///
    /// The raw input lands in the history; resolution runs on the trimmed,
    /// case-folded token.
    pub fn submit(&mut self, input: &str) {
        self.history.push(input.to_owned());
        self.cursor = None;

        let token = input.trim().to_lowercase();
        if token == "clear" {
            self.transcript.clear();
            return;
        }

        self.transcript
            .push(TranscriptLine::command(format!("$ {input}")));

        if token.is_empty() {
            self.transcript.push(TranscriptLine::output(""));
            return;
        }

        match builtin(&token) {
            Some(lines) => {
                self.transcript.extend(lines);
                self.transcript.push(TranscriptLine::output(""));
            }
            None => {
                debug!(%token, "unknown console command");
                self.transcript
                    .push(TranscriptLine::error(format!("Command not found: {input}")));
                self.transcript
                    .push(TranscriptLine::output("Type \"help\" for command index"));
                self.transcript.push(TranscriptLine::output(""));
            }
        }
    }

    /// Walk one step back through the input history (ArrowUp).
    ///
    /// The first call recalls the most recent entry; further calls walk
    /// toward the oldest and stop there.
    pub fn history_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(next);
        self.history.get(next).map(String::as_str)
    }

    /// Walk one step forward through the input history (ArrowDown).
    ///
    /// Walking past the most recent entry returns `None` and clears the
    /// cursor; the caller restores an empty input line.
    pub fn history_next(&mut self) -> Option<&str> {
        let i = self.cursor?;
        if i + 1 >= self.history.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(i + 1);
        self.history.get(i + 1).map(String::as_str)
    }
}
