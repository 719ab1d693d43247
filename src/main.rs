//! Name Forge - Vietnamese name numerology from the command line
//!
//! Analyze names, nicknames and parent compatibility, or search for name
//! suggestions ranked by numerology and Five-Element harmony.

use name_forge::{
    numerology::get_meaning,
    suggest::{compare_candidates, ComparisonTable},
    CandidateFilter, EngineConfig, NameCandidate, NameForgeError, NicknameCandidate,
    NicknameOptions, NicknameResult, NumerologyEngine, NumerologyResult, ParentInput, Result,
    SuggestOptions,
};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::process;
use std::str::FromStr;
use tracing::Level;

fn main() {
    if let Err(e) = name_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(args) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Log to stderr at the level named by NAME_FORGE_LOG (default: warn)
fn init_logging() {
    let level = env::var("NAME_FORGE_LOG")
        .ok()
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Parsed command line: positionals, `--key value` options and `--json`
struct CliArgs {
    positional: Vec<String>,
    options: HashMap<String, String>,
    json: bool,
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let mut positional = Vec::new();
        let mut options = HashMap::new();
        let mut json = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--json" {
                json = true;
            } else if let Some(key) = arg.strip_prefix("--") {
                let value = iter
                    .next()
                    .ok_or_else(|| NameForgeError::cli(format!("--{} requires a value", key)))?;
                options.insert(key.to_string(), value.clone());
            } else {
                positional.push(arg.clone());
            }
        }

        Ok(Self {
            positional,
            options,
            json,
        })
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| NameForgeError::cli(format!("missing required option --{}", key)))
    }

    fn parse_opt<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        self.get(key)
            .map(|raw| {
                raw.trim()
                    .parse::<T>()
                    .map_err(|_| NameForgeError::cli(format!("invalid value for --{}: {}", key, raw)))
            })
            .transpose()
    }

    /// Positional words joined into one name
    fn joined(&self) -> Option<String> {
        if self.positional.is_empty() {
            None
        } else {
            Some(self.positional.join(" "))
        }
    }
}

fn run(args: Vec<String>) -> Result<()> {
    let Some((command, rest)) = args.split_first() else {
        print_help();
        return Ok(());
    };

    if matches!(command.as_str(), "help" | "--help" | "-h") {
        print_help();
        return Ok(());
    }
    if matches!(command.as_str(), "--version" | "-V") {
        println!("name-forge {}", name_forge::VERSION);
        return Ok(());
    }

    let cli = CliArgs::parse(rest)?;
    let config = EngineConfig::from_env()?;
    let engine = NumerologyEngine::with_config(config)?;

    match command.as_str() {
        "analyze" => cmd_analyze(&engine, &cli),
        "nickname" => cmd_nickname(&engine, &cli),
        "suggest" => cmd_suggest(&engine, &cli),
        "nicknames" => cmd_nicknames(&engine, &cli),
        "compare" => cmd_compare(&engine, &cli),
        "canchi" => cmd_canchi(&engine, &cli),
        "meaning" => cmd_meaning(&cli),
        other => Err(NameForgeError::cli(format!("unknown command: {}", other))),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| NameForgeError::internal(format!("Failed to serialize output: {}", e)))?;
    println!("{}", out);
    Ok(())
}

fn cmd_analyze(engine: &NumerologyEngine, cli: &CliArgs) -> Result<()> {
    let name = cli
        .joined()
        .ok_or_else(|| NameForgeError::cli("analyze needs a name"))?;
    let date = cli.require("date")?;
    let result = engine.analyze(&name, date);

    let parents = [("father", "Bố"), ("mother", "Mẹ")]
        .into_iter()
        .filter_map(|(key, label)| {
            let parent_name = cli.get(&format!("{}-name", key))?;
            let parent_date = cli.get(&format!("{}-date", key))?;
            let parent = ParentInput::new(parent_name, parent_date);
            Some((label, engine.parent_compatibility(&name, date, &parent)))
        })
        .collect::<Vec<_>>();

    if cli.json {
        if parents.is_empty() {
            return print_json(&result);
        }
        let parent_results: Vec<_> = parents.iter().map(|(_, p)| p).collect();
        return print_json(&serde_json::json!({
            "analysis": result,
            "parents": parent_results,
        }));
    }

    print_analysis(&result);
    for (label, parent) in &parents {
        println!();
        println!("👪 {} - {} ({})", label, parent.parent_name, parent.parent_birth_date);
        println!("   Điểm: {}/100 ({})", parent.score, parent.level);
        for pair in &parent.breakdown {
            println!(
                "   • {}: {} ↔ {} = {} (x{}%)",
                pair.label, pair.child_value, pair.parent_value, pair.pair_score, pair.weight
            );
        }
        println!("   💭 {}", parent.description);
    }
    Ok(())
}

fn print_analysis(result: &NumerologyResult) {
    println!("🔢 {} ({})", result.original_name, result.normalized_name);
    println!("═══════════════════════════════════════");
    println!("   📅 Ngày sinh:     {}", result.birth_date);
    println!("   Đường đời:        {}", result.life_path);
    println!("   Sứ mệnh:          {}", result.expression);
    println!("   Linh hồn:         {}", result.soul_urge);
    println!("   Nhân cách:        {}", result.personality);
    println!("   Trưởng thành:     {}", result.maturity);
    println!("   Ngày sinh (số):   {}", result.birthday);
    println!();

    if let Some(fe) = &result.five_element {
        println!(
            "☯️  {} ({}, {}) - mệnh tên {}, mệnh năm {}",
            fe.can_chi,
            fe.can_chi.polarity.vi_name(),
            fe.can_chi.stem_element.vi_name(),
            fe.name_element.vi_name(),
            fe.year_element.vi_name()
        );
        println!("   {} ({:+})", fe.relation.description, fe.relation.score_adjustment);
        println!();
    }

    println!(
        "⭐ Điểm hài hòa: {}/100 ({})",
        result.compatibility.score, result.compatibility.level
    );
    println!("   💭 {}", result.compatibility.description);
}

fn cmd_nickname(engine: &NumerologyEngine, cli: &CliArgs) -> Result<()> {
    let nickname = cli
        .joined()
        .ok_or_else(|| NameForgeError::cli("nickname needs a nickname"))?;
    let result = engine.analyze_nickname(&nickname, cli.get("name"), cli.get("date"));

    if cli.json {
        return print_json(&result);
    }
    print_nickname(&result);
    Ok(())
}

fn print_nickname(result: &NicknameResult) {
    println!("🏷️  {} ({})", result.nickname, result.normalized_nickname);
    println!(
        "   Sứ mệnh phụ: {}  Linh hồn phụ: {}  Nhân cách phụ: {}",
        result.minor_expression, result.minor_soul_urge, result.minor_personality
    );
    if let Some(cmp) = &result.comparison {
        println!(
            "   🤝 Hài hòa với {}: {}/100 ({})",
            cmp.full_name, cmp.harmony_score, cmp.level
        );
        println!("   💭 {}", cmp.description);
    }
}

fn suggest_options(cli: &CliArgs) -> Result<SuggestOptions> {
    let mut options = SuggestOptions::new(cli.require("surname")?, cli.require("date")?);

    if let Some(gender) = cli.parse_opt("gender")? {
        options = options.with_gender(gender);
    }
    if let Some(middle) = cli.get("middle") {
        options = options.with_middle_name(middle);
    }
    if let Some(middle) = cli.get("middle2") {
        options = options.with_middle_name2(middle);
    }
    if let Some(exclude) = cli.get("exclude") {
        options = options.with_exclude(exclude.split(',').map(str::to_string).collect());
    }
    if let Some(limit) = cli.parse_opt("limit")? {
        options = options.with_limit(limit);
    }
    if let (Some(name), Some(date)) = (cli.get("father-name"), cli.get("father-date")) {
        options = options.with_father(ParentInput::new(name, date));
    }
    if let (Some(name), Some(date)) = (cli.get("mother-name"), cli.get("mother-date")) {
        options = options.with_mother(ParentInput::new(name, date));
    }
    Ok(options)
}

fn cmd_suggest(engine: &NumerologyEngine, cli: &CliArgs) -> Result<()> {
    let options = suggest_options(cli)?;

    let mut filter = CandidateFilter::new();
    if let Some(min) = cli.parse_opt("min-score")? {
        filter = filter.with_min_score(min);
    }
    if let Some(element) = cli.parse_opt("element")? {
        filter = filter.with_element(element);
    }
    if let Some(sort) = cli.parse_opt("sort")? {
        filter = filter.with_sort(sort);
    }

    let candidates = filter.apply(engine.suggest(&options)?);

    if cli.json {
        return print_json(&candidates);
    }
    print_candidates(&candidates);
    Ok(())
}

fn print_candidates(candidates: &[NameCandidate]) {
    if candidates.is_empty() {
        println!("😔 Không tìm thấy tên phù hợp.");
        return;
    }

    println!("✨ Gợi ý tên ({}):", candidates.len());
    println!("─────────────────────────");
    for (i, c) in candidates.iter().enumerate() {
        let element = c
            .analysis
            .five_element
            .as_ref()
            .map(|fe| fe.name_element.vi_name())
            .unwrap_or("-");
        print!(
            "{:>3}. {} - {}/100 [{}] (Sứ mệnh {}, {})",
            i + 1,
            c.full_name,
            c.effective_score(),
            c.analysis.compatibility.level,
            c.analysis.expression,
            element
        );
        if let Some(blended) = &c.blended_score {
            print!(" · tên {} · bố mẹ {}", blended.name_score, blended.parent_score);
        }
        println!();
        if !c.meaning.is_empty() {
            println!("     💭 {}", c.meaning);
        }
    }
}

fn cmd_nicknames(engine: &NumerologyEngine, cli: &CliArgs) -> Result<()> {
    let mut options = NicknameOptions::new(cli.require("name")?, cli.require("date")?);
    if let Some(gender) = cli.parse_opt("gender")? {
        options = options.with_gender(gender);
    }
    if let Some(limit) = cli.parse_opt("limit")? {
        options = options.with_limit(limit);
    }

    let candidates = engine.suggest_nicknames(&options)?;
    if cli.json {
        return print_json(&candidates);
    }
    print_nickname_candidates(&candidates);
    Ok(())
}

fn print_nickname_candidates(candidates: &[NicknameCandidate]) {
    println!("🏷️  Gợi ý biệt danh ({}):", candidates.len());
    println!("─────────────────────────");
    for (i, c) in candidates.iter().enumerate() {
        println!(
            "{:>3}. {} - {}/100 [{}] {}",
            i + 1,
            c.nickname,
            c.harmony_score(),
            c.category,
            c.meaning
        );
    }
}

/// Split a display name into surname, middle part and given name
fn candidate_from_name(engine: &NumerologyEngine, full_name: &str, date: &str) -> NameCandidate {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    let surname = words.first().copied().unwrap_or_default();
    let given = if words.len() > 1 {
        words.last().copied().unwrap_or_default()
    } else {
        ""
    };
    let middle = if words.len() > 2 {
        words[1..words.len() - 1].join(" ")
    } else {
        String::new()
    };

    NameCandidate {
        surname: surname.to_string(),
        middle_part: middle,
        given_name: given.to_string(),
        full_name: full_name.trim().to_string(),
        meaning: String::new(),
        analysis: engine.analyze(full_name, date),
        blended_score: None,
    }
}

fn cmd_compare(engine: &NumerologyEngine, cli: &CliArgs) -> Result<()> {
    let date = cli.require("date")?;
    if cli.positional.len() < 2 {
        return Err(NameForgeError::cli("compare needs at least two quoted names"));
    }

    let candidates: Vec<NameCandidate> = cli
        .positional
        .iter()
        .map(|name| candidate_from_name(engine, name, date))
        .collect();
    let table = compare_candidates(&candidates);

    if cli.json {
        return print_json(&table);
    }
    print_table(&table);
    Ok(())
}

fn print_table(table: &ComparisonTable) {
    let width = table.names.iter().map(|n| n.chars().count()).max().unwrap_or(0).max(6);

    print!("{:<14}", "");
    for name in &table.names {
        print!(" │ {:<width$}", name, width = width);
    }
    println!();
    for row in &table.rows {
        print!("{:<14}", row.label);
        for value in &row.values {
            print!(" │ {:<width$}", value, width = width);
        }
        println!();
    }
}

fn cmd_canchi(engine: &NumerologyEngine, cli: &CliArgs) -> Result<()> {
    let raw = cli
        .positional
        .first()
        .ok_or_else(|| NameForgeError::cli("canchi needs a year"))?;
    let year: i64 = raw
        .parse()
        .map_err(|_| NameForgeError::cli(format!("invalid year: {}", raw)))?;
    let can_chi = engine.can_chi(year);

    if cli.json {
        return print_json(&can_chi);
    }
    println!("☯️  {}: {}", year, can_chi);
    println!(
        "   Can: {} ({}, {})",
        can_chi.stem,
        can_chi.stem_element.vi_name(),
        can_chi.polarity.vi_name()
    );
    println!("   Chi: {} ({})", can_chi.branch, can_chi.branch_element.vi_name());
    println!("   {}", can_chi.stem_element.description());
    Ok(())
}

fn cmd_meaning(cli: &CliArgs) -> Result<()> {
    let raw = cli
        .positional
        .first()
        .ok_or_else(|| NameForgeError::cli("meaning needs a number"))?;
    let number: u32 = raw
        .parse()
        .map_err(|_| NameForgeError::cli(format!("invalid number: {}", raw)))?;
    let meaning = get_meaning(number);

    if cli.json {
        return print_json(&meaning);
    }
    println!("🔮 Số {} - {}", meaning.number, meaning.name);
    if !meaning.keywords.is_empty() {
        println!("   🔑 {}", meaning.keywords.join(", "));
    }
    if !meaning.description.is_empty() {
        println!("   {}", meaning.description);
    }
    if !meaning.strengths.is_empty() {
        println!("   ✅ {}", meaning.strengths.join(", "));
    }
    if !meaning.challenges.is_empty() {
        println!("   ⚠️  {}", meaning.challenges.join(", "));
    }
    Ok(())
}

/// Print help information
fn print_help() {
    println!("🔢 Name Forge - Vietnamese name numerology");
    println!("═══════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    name-forge <COMMAND> [OPTIONS] [--json]");
    println!();
    println!("COMMANDS:");
    println!("    analyze <NAME> --date <DATE>               Analyze a full name");
    println!("        [--father-name N --father-date D] [--mother-name N --mother-date D]");
    println!("    nickname <NICK> [--name <NAME> --date <DATE>]  Analyze a nickname");
    println!("    suggest --surname <S> --date <DATE>        Suggest full names");
    println!("        [--gender male|female|all] [--middle M] [--middle2 M]");
    println!("        [--exclude a,b] [--limit N] [--min-score N] [--element kim|moc|...]");
    println!("        [--sort score|name|expression] [--father-name ...] [--mother-name ...]");
    println!("    nicknames --name <NAME> --date <DATE>      Suggest nicknames");
    println!("        [--gender male|female|all] [--limit N]");
    println!("    compare --date <DATE> \"<NAME>\" \"<NAME>\"...  Compare names side by side");
    println!("    canchi <YEAR>                              Heavenly Stem / Earthly Branch");
    println!("    meaning <NUMBER>                           Meaning of a number");
    println!("    help                                       Show this help");
    println!();
    println!("DATES:");
    println!("    YYYY-MM-DD or DD/MM/YYYY");
    println!();
    println!("EXAMPLES:");
    println!("    name-forge analyze Nguyễn Văn An --date 2024-03-15");
    println!("    name-forge suggest --surname Trần --date 2024-03-15 --gender female --limit 10");
    println!("    name-forge canchi 2026");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    NAME_FORGE_LIMIT           Default suggestion count (default: 30)");
    println!("    NAME_FORGE_NICKNAME_LIMIT  Default nickname count (default: 20)");
    println!("    NAME_FORGE_PARENT_WEIGHT   Parent share of blended score, 0-100 (default: 30)");
    println!("    NAME_FORGE_CACHE_CAPACITY  Analysis cache size (default: 256)");
    println!("    NAME_FORGE_DICTIONARY      Path to a JSON name dictionary");
    println!("    NAME_FORGE_LOG             Log level: error|warn|info|debug|trace (default: warn)");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
