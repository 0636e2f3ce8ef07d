use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use faqrag_core::config::{expand_path, Config};
use faqrag_core::loader;
use faqrag_core::types::{SearchQuery, DEFAULT_LIMIT};
use faqrag_llm::{ChatClient, DEFAULT_MODEL};
use faqrag_pipeline::RagPipeline;
use faqrag_text::SearchIndex;

const TEXT_FIELDS: [&str; 3] = ["question", "text", "section"];
const KEYWORD_FIELDS: [&str; 1] = ["group_id"];

struct QueryArgs {
    text: String,
    group: Option<String>,
    limit: usize,
    boosts: HashMap<String, f32>,
    documents: Option<PathBuf>,
}

fn usage(prog: &str) -> ! {
    eprintln!("Usage: {} <search|ask> \"<text>\" [--group <id>] [--limit <n>] [--boost <field=weight>] [--documents <path>]", prog);
    std::process::exit(1);
}

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() { usage(&prog); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn flag_value(args: &[String], i: usize) -> String {
    args.get(i + 1).cloned().unwrap_or_else(|| {
        eprintln!("Error: {} requires a value", args[i]);
        std::process::exit(1)
    })
}

fn parse_query_args(mut args: Vec<String>) -> QueryArgs {
    if args.is_empty() { usage("faqrag"); }
    let text = args.remove(0);
    let mut group = None;
    let mut limit = DEFAULT_LIMIT;
    let mut boosts = HashMap::new();
    let mut documents = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--group" | "-g" => { group = Some(flag_value(&args, i)); i += 1; }
            "--limit" | "-k" => {
                limit = flag_value(&args, i).parse().unwrap_or_else(|_| {
                    eprintln!("Error: --limit requires a number");
                    std::process::exit(1)
                });
                i += 1;
            }
            "--boost" => {
                let pair = flag_value(&args, i);
                match pair.split_once('=').and_then(|(f, w)| w.parse::<f32>().ok().map(|w| (f.to_string(), w))) {
                    Some((field, weight)) => { boosts.insert(field, weight); }
                    None => { eprintln!("Error: --boost expects <field=weight>"); std::process::exit(1); }
                }
                i += 1;
            }
            "--documents" => { documents = Some(PathBuf::from(flag_value(&args, i))); i += 1; }
            other => { eprintln!("Unknown flag: {}", other); std::process::exit(1); }
        }
        i += 1;
    }
    QueryArgs { text, group, limit, boosts, documents }
}

fn build_index(config: &Config, documents: Option<PathBuf>) -> anyhow::Result<SearchIndex> {
    let documents_path = documents.unwrap_or_else(|| {
        let path: String = config.get("data.documents_path").unwrap_or_else(|_| "documents.json".to_string());
        expand_path(path)
    });
    println!("Loading documents from {}", documents_path.display());
    let corpus = loader::load(&documents_path)?;
    let index = SearchIndex::fit(corpus, &TEXT_FIELDS, &KEYWORD_FIELDS)?;
    println!("📊 Indexed {} documents", index.len());
    Ok(index)
}

fn to_query(args: &QueryArgs) -> SearchQuery {
    let mut query = SearchQuery::new(args.text.clone());
    query.limit = args.limit;
    query.boosts = args.boosts.clone();
    if let Some(group) = &args.group {
        query.filters.insert("group_id".to_string(), group.clone());
    }
    query
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "search" => {
            let query_args = parse_query_args(args);
            let index = build_index(&config, query_args.documents.clone())?;
            let results = index.search(&to_query(&query_args))?;
            println!("\n🔍 Found {} results for: \"{}\"", results.len(), query_args.text);
            for (i, document) in results.iter().enumerate() {
                println!("\n  {}. group={}  section={}", i + 1, document.group_id, document.section);
                println!("     ❓ {}", document.question);
                println!("     📝 {}", document.text);
            }
        }
        "ask" => {
            let query_args = parse_query_args(args);
            let index = build_index(&config, query_args.documents.clone())?;
            let endpoint: String = config.get("llm.endpoint").unwrap_or_else(|_| "https://api.openai.com".to_string());
            let model: String = config.get("llm.model").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            let api_key: Option<String> = config.get("llm.api_key").ok()
                .or_else(|| env::var("OPENAI_API_KEY").ok());
            let client = ChatClient::new(&endpoint, api_key)?;
            let pipeline = RagPipeline::new(index, Box::new(client), model);
            let query = to_query(&query_args);
            let answer = tokio::runtime::Runtime::new()?.block_on(async { pipeline.answer(&query).await })?;
            println!("\n💬 {}", answer);
        }
        _ => { eprintln!("Unknown command: {}", cmd); std::process::exit(1); }
    }
    Ok(())
}
