use ask_page::QueryMode;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ask-page")]
#[command(about = "Ask a local language model questions about a scraped web page")]
#[command(version)]
#[command(group(ArgGroup::new("mode").args(["ask", "topic", "links"])))]
pub struct Args {
    /// JSON element dump written by the page scraper
    pub source: PathBuf,

    /// JSON configuration file (model, host, decoding options)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model identifier, overrides the configuration file
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama server URL, overrides the configuration file
    #[arg(long, env = "OLLAMA_HOST")]
    pub host: Option<String>,

    /// Ask a single question and exit
    #[arg(long)]
    pub ask: Option<String>,

    /// Analyze a single topic and exit
    #[arg(long)]
    pub topic: Option<String>,

    /// Find links related to a topic and exit
    #[arg(long)]
    pub links: Option<String>,

    /// Strip <think> blocks from answers of reasoning models
    #[arg(long)]
    pub hide_reasoning: bool,
}

impl Args {
    /// The one-shot query requested on the command line, if any
    pub fn one_shot(&self) -> Option<(QueryMode, &str)> {
        if let Some(q) = &self.ask {
            Some((QueryMode::FreeForm, q))
        } else if let Some(t) = &self.topic {
            Some((QueryMode::Topic, t))
        } else {
            self.links.as_deref().map(|t| (QueryMode::RelatedLinks, t))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        let mut argv = vec!["ask-page", "page_content.json"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_one_shot_modes() {
        let cases = [
            (vec!["--ask", "What is this?"], QueryMode::FreeForm, "What is this?"),
            (vec!["--topic", "pricing"], QueryMode::Topic, "pricing"),
            (vec!["--links", "support"], QueryMode::RelatedLinks, "support"),
        ];

        for (extra, mode, input) in cases {
            let args = parse(&extra).unwrap();
            assert_eq!(args.one_shot(), Some((mode, input)), "args {:?}", extra);
        }
    }

    #[test]
    fn test_interactive_without_mode_flag() {
        let args = parse(&["--model", "llama3"]).unwrap();
        assert_eq!(args.source, PathBuf::from("page_content.json"));
        assert_eq!(args.model.as_deref(), Some("llama3"));
        assert_eq!(args.one_shot(), None);
    }

    #[test]
    fn test_mode_flags_conflict() {
        let err = parse(&["--topic", "pricing", "--links", "support"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_source_is_required() {
        assert!(Args::try_parse_from(["ask-page"]).is_err());
    }
}
