use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use reader_core::{
    load_text, state,
    types::{DocumentFormat, DocumentInfo},
    PdfDocument,
};
use search_core::{
    highlight::{HighlightInstructions, ScrollTarget},
    history::SearchHistory,
    Direction, DocumentSource, MatchRecord, SearchError, SearchOutcome, SearchSession,
};

struct Options {
    path: String,
    term: Option<String>,
    case_sensitive: bool,
    whole_word: bool,
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Some(options) => options,
        None => {
            eprintln!(
                "Usage: readify <file> [term...] [--case-sensitive|-c] [--whole-word|-w]"
            );
            eprintln!("With no term, starts an interactive prompt (:n :p :history :q).");
            std::process::exit(2);
        }
    };

    let (info, source) = match open_document(&options.path) {
        Ok(opened) => opened,
        Err(message) => {
            eprintln!("Failed to open {}: {}", options.path, message);
            std::process::exit(1);
        }
    };
    match (&info.title, &info.author) {
        (Some(title), Some(author)) => eprintln!("Opened: {} by {}", title, author),
        (Some(title), None) => eprintln!("Opened: {}", title),
        _ => eprintln!("Opened: {}", info.path),
    }

    let history = SearchHistory::from_terms(state::load_history());
    let mut session = SearchSession::with_history(source, history);

    match &options.term {
        Some(term) => {
            run_search(&mut session, term, &options);
        }
        None => {
            run_prompt(&mut session, &options);
        }
    }

    let terms: Vec<String> = session.history().map(str::to_string).collect();
    if let Err(e) = state::save_history(&terms) {
        eprintln!("Could not save search history: {}", e);
    }
}

fn parse_args(args: impl Iterator<Item = String>) -> Option<Options> {
    let mut path: Option<String> = None;
    let mut term_words: Vec<String> = Vec::new();
    let mut case_sensitive = false;
    let mut whole_word = false;
    for arg in args {
        match arg.as_str() {
            "--case-sensitive" | "-c" => case_sensitive = true,
            "--whole-word" | "-w" => whole_word = true,
            _ if path.is_none() => path = Some(arg),
            _ => term_words.push(arg),
        }
    }
    Some(Options {
        path: path?,
        term: if term_words.is_empty() {
            None
        } else {
            Some(term_words.join(" "))
        },
        case_sensitive,
        whole_word,
    })
}

fn open_document(path: &str) -> Result<(DocumentInfo, DocumentSource), String> {
    let format = detect_format(path);
    match format {
        DocumentFormat::Pdf => {
            let pdf = PdfDocument::open(Path::new(path)).map_err(|e| e.to_string())?;
            let summary = pdf.summary();
            let info = DocumentInfo {
                path: path.to_string(),
                title: summary.title.clone(),
                author: summary.author.clone(),
                format,
            };
            eprintln!("{} page(s)", summary.page_count);
            Ok((info, DocumentSource::from(pdf.into_source())))
        }
        _ => {
            let source = load_text(Path::new(path)).map_err(|e| e.to_string())?;
            let info = DocumentInfo {
                path: path.to_string(),
                title: Path::new(path)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string),
                author: None,
                format,
            };
            Ok((info, DocumentSource::from(source)))
        }
    }
}

fn detect_format(path: &str) -> DocumentFormat {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| match ext.to_ascii_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "txt" | "text" | "md" => DocumentFormat::Text,
            _ => DocumentFormat::Other,
        })
        .unwrap_or(DocumentFormat::Text)
}

fn run_search(session: &mut SearchSession, term: &str, options: &Options) {
    match session.search(term, options.case_sensitive, options.whole_word) {
        Ok(SearchOutcome::Found { count, highlights }) => {
            println!("{} match(es) for \"{}\"", count, term);
            print_highlights(session, &highlights);
        }
        Ok(SearchOutcome::NotFound) => {
            println!("No results for \"{}\"", term);
        }
        Err(SearchError::InvalidPattern) => {
            eprintln!("Search term is empty.");
        }
        Err(e) => {
            eprintln!("Search failed: {}", e);
        }
    }
}

fn run_prompt(session: &mut SearchSession, options: &Options) {
    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        print!("[{}] > ", session.position_display());
        let _ = out.flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        match line {
            "" => continue,
            ":q" => break,
            ":n" => step(session, Direction::Next),
            ":p" => step(session, Direction::Previous),
            ":history" => {
                if session.history().next().is_none() {
                    println!("No search history.");
                }
                for (i, term) in session.history().enumerate() {
                    println!("{:>2}. {}", i + 1, term);
                }
            }
            term => run_search(session, term, options),
        }
    }
}

fn step(session: &mut SearchSession, direction: Direction) {
    match session.advance(direction) {
        Ok(highlights) => print_current(session, &highlights),
        Err(SearchError::EmptyResultSet) => eprintln!("No active search results."),
        Err(e) => eprintln!("{}", e),
    }
}

fn print_highlights(session: &SearchSession, highlights: &HighlightInstructions) {
    for record in &highlights.all {
        println!("  {}", describe(session, record));
    }
    print_current(session, highlights);
}

fn print_current(session: &SearchSession, highlights: &HighlightInstructions) {
    if let Some(current) = &highlights.current {
        let target = match current.scroll {
            ScrollTarget::Offset(offset) => format!("offset {}", offset),
            ScrollTarget::PagePoint { page, x, y } => {
                format!("page {} at ({:.1}, {:.1})", page + 1, x, y)
            }
        };
        println!(
            "Current [{}]: {} -> {}",
            session.position_display(),
            describe(session, &current.record),
            target
        );
    }
}

fn describe(session: &SearchSession, record: &MatchRecord) -> String {
    match record {
        MatchRecord::Text { start, end } => {
            let snippet = match session.source() {
                DocumentSource::Flat(flat) => context_line(flat.text(), *start, *end),
                DocumentSource::Paginated(_) => String::new(),
            };
            format!("{}..{}  {}", start, end, snippet)
        }
        MatchRecord::Page { page, region } => format!(
            "page {}  [{:.1}, {:.1}, {:.1}, {:.1}]",
            page + 1,
            region.x0,
            region.y0,
            region.x1,
            region.y1
        ),
    }
}

// The full line containing the match, for terminal context.
fn context_line(text: &str, start: usize, end: usize) -> String {
    let line_start = text[..start].rfind('\n').map(|p| p + 1).unwrap_or(0);
    let line_end = text[end..].find('\n').map(|p| end + p).unwrap_or(text.len());
    text[line_start..line_end].trim().to_string()
}
