use std::{env, fs, time::Instant};

use alumni_insight::record::{ActivityLevel, AlumniRecord};
use alumni_insight::vectorizer::index::{RankedSearchIndex, DEFAULT_SEARCH_LIMIT};

fn main() {
    let program_start = Instant::now();
    // ---- CLI args ----
    // --records FILE : CBOR-encoded Vec<AlumniRecord> (default: built-in sample)
    // --query TEXT   : run one query and exit (default: interactive loop)
    // --limit N      : result cap per query
    let mut args = env::args().skip(1);
    let mut records_path: Option<String> = None;
    let mut query_opt: Option<String> = None;
    let mut limit = DEFAULT_SEARCH_LIMIT;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--records" => {
                if let Some(v) = args.next() {
                    records_path = Some(v);
                } else {
                    eprintln!("[error] --records requires a path");
                    return;
                }
            }
            "--query" => {
                if let Some(v) = args.next() {
                    query_opt = Some(v);
                } else {
                    eprintln!("[error] --query requires a string");
                    return;
                }
            }
            "--limit" => {
                match args.next().and_then(|v| v.parse::<usize>().ok()) {
                    Some(n) if n > 0 => limit = n,
                    _ => {
                        eprintln!("[error] --limit needs a positive integer");
                        return;
                    }
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                // First positional arg doubles as the query.
                if query_opt.is_none() {
                    query_opt = Some(other.to_string());
                } else {
                    eprintln!("[warn] extra arg ignored: {}", other);
                }
            }
        }
    }

    // ---- Load records ----
    let records = match &records_path {
        Some(path) => match load_records(path) {
            Ok(records) => {
                eprintln!("[info] loaded {} records from {}", records.len(), path);
                records
            }
            Err(e) => {
                eprintln!("[error] failed to load records: {}", e);
                return;
            }
        },
        None => {
            let records = sample_records();
            eprintln!("[info] using {} built-in sample records", records.len());
            records
        }
    };
    if records.is_empty() {
        eprintln!("[error] no records loaded. abort");
        return;
    }

    let build_start = Instant::now();
    let index = RankedSearchIndex::new(records);
    eprintln!(
        "[time] index_build={:.2}ms ({} records)",
        build_start.elapsed().as_secs_f64() * 1000.0,
        index.len()
    );

    if let Some(query) = query_opt {
        run_query(&index, &query, limit);
    } else {
        run_interactive(&index, limit);
    }

    eprintln!(
        "[time] program_total={:.2}ms",
        program_start.elapsed().as_secs_f64() * 1000.0
    );
}

fn print_usage() {
    eprintln!("Usage: alumni-insight [--records FILE] [--limit N] [--query \"TEXT\"]");
    eprintln!("If --query is omitted, an interactive prompt starts.");
    eprintln!("Output format: <score>\\t<name>\\t<reason>");
}

fn load_records(path: &str) -> Result<Vec<AlumniRecord>, Box<dyn std::error::Error>> {
    let file = fs::File::open(path)?;
    let records = serde_cbor::from_reader(file)?;
    Ok(records)
}

fn run_query(index: &RankedSearchIndex, query: &str, limit: usize) {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        eprintln!("[error] empty query");
        return;
    }
    let t0 = Instant::now();
    let hits = index.search(trimmed, limit);
    eprintln!(
        "[time] search={:.2}ms hits={}",
        t0.elapsed().as_secs_f64() * 1000.0,
        hits.len()
    );
    for hit in &hits {
        println!("{:.4}\t{}\t{}", hit.score, hit.record.name, hit.match_reason());
    }
}

fn run_interactive(index: &RankedSearchIndex, limit: usize) {
    use std::io::{self, Write};
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Query> ");
        let _ = stdout.flush();
        let mut line = String::new();
        if stdin.read_line(&mut line).is_err() {
            eprintln!("[error] read error");
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("exit")
            || trimmed.eq_ignore_ascii_case("quit")
        {
            eprintln!("[info] bye");
            break;
        }
        let t0 = Instant::now();
        let hits = index.search(trimmed, limit);
        eprintln!(
            "[time] search={:.2}ms hits={}",
            t0.elapsed().as_secs_f64() * 1000.0,
            hits.len()
        );
        if hits.is_empty() {
            println!("(no matches)");
            continue;
        }
        for hit in &hits {
            println!("{:.4}\t{}\t{}", hit.score, hit.record.name, hit.match_reason());
        }
    }
}

fn sample_records() -> Vec<AlumniRecord> {
    let make = |id: u64,
                name: &str,
                title: &str,
                company: &str,
                location: &str,
                skills: &[&str],
                interests: &[&str]| AlumniRecord {
        id,
        name: name.to_string(),
        job_title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        department: String::new(),
        graduation_year: 2018,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        activity_level: ActivityLevel::Medium,
        profile_completion: 75,
        last_active_days: 14.0,
        past_event_count: 3,
        past_donations: 0.0,
    };
    vec![
        make(
            1,
            "Sarah Chen",
            "Software Engineer",
            "Google",
            "San Francisco",
            &["Python", "Kubernetes", "Go"],
            &["machine learning", "open source"],
        ),
        make(
            2,
            "Marcus Webb",
            "Data Scientist",
            "Netflix",
            "Los Angeles",
            &["Python", "SQL", "Spark"],
            &["recommendation systems"],
        ),
        make(
            3,
            "Priya Nair",
            "Product Manager",
            "Stripe",
            "New York",
            &["Roadmapping", "Analytics"],
            &["fintech", "payments"],
        ),
        make(
            4,
            "Tom Eriksen",
            "DevOps Engineer",
            "Spotify",
            "Stockholm",
            &["Terraform", "Kubernetes", "AWS"],
            &["distributed systems"],
        ),
        make(
            5,
            "Aisha Bello",
            "Frontend Developer",
            "Shopify",
            "Toronto",
            &["TypeScript", "React"],
            &["design systems", "accessibility"],
        ),
    ]
}
