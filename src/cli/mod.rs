//! Command-line surface: flag lexing, URL extraction, help screens, and
//! the dispatcher that ties one input line to one HTTP exchange.

pub mod help;
pub mod lexer;
pub mod url;

use std::fmt;

use crate::config::Config;
use crate::http::request::{BuildError, Method, Request, RequestBuilder};
use crate::http::response::Response;
use crate::net;

use help::Topic;
use lexer::{RawFlag, strip_quotes};

/// Recognized program name and flag names, as data.
///
/// Kept out of the lexer so a dispatcher can be constructed with a variant
/// grammar in tests.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub program: String,
    pub verbose_flag: String,
    pub header_flag: String,
    pub data_flag: String,
    pub file_flag: String,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            program: "httpc".to_string(),
            verbose_flag: "-v".to_string(),
            header_flag: "-h".to_string(),
            data_flag: "-d".to_string(),
            file_flag: "-f".to_string(),
        }
    }
}

/// What a successfully parsed input line asks for.
#[derive(Debug, Clone)]
pub enum Command {
    /// Bare program name: print the short usage hint.
    Usage,
    /// `help` with an optional topic.
    Help(Option<Topic>),
    /// A GET or POST exchange, fully assembled and ready to send.
    Fetch {
        request: Request,
        host: String,
        port: u16,
        verbose: bool,
    },
}

#[derive(Debug)]
pub enum CommandError {
    /// The line does not start with the program name.
    UnknownProgram,
    /// The verb is not `get`, `post`, or `help`.
    UnknownCommand,
    /// No URL-shaped substring was found on the line.
    NoUrl,
    /// A flag that requires a parameter had none.
    EmptyParameter { flag: String },
    /// A header parameter without the `key:value` shape.
    MalformedHeader { param: String },
    /// Inline data and a file body were both supplied.
    BodySourceConflict { data_flag: String, file_flag: String },
    Build(BuildError),
    FileRead { path: String, source: std::io::Error },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownProgram => write!(f, "unknown command"),
            CommandError::UnknownCommand => write!(f, "unknown or invalid command"),
            CommandError::NoUrl => write!(f, "a valid URL is required"),
            CommandError::EmptyParameter { flag } => {
                write!(f, "flag '{flag}' requires a parameter")
            }
            CommandError::MalformedHeader { param } => {
                write!(f, "header must use the 'key:value' format: '{param}'")
            }
            CommandError::BodySourceConflict { data_flag, file_flag } => {
                write!(f, "{data_flag} and {file_flag} cannot be used together")
            }
            CommandError::Build(e) => write!(f, "{e}"),
            CommandError::FileRead { path, source } => {
                write!(f, "cannot read file '{path}': {source}")
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Build(e) => Some(e),
            CommandError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Flags of one invocation, sorted into the grammar's categories.
struct ParsedFlags {
    verbose: bool,
    headers: Vec<(String, String)>,
    data: Option<String>,
    file: Option<String>,
}

/// Routes one input line through parse → validate → send → print.
pub struct Dispatcher {
    grammar: Grammar,
    config: Config,
}

impl Dispatcher {
    pub fn new(grammar: Grammar, config: Config) -> Self {
        Self { grammar, config }
    }

    /// Parse and validate one line without touching the network.
    ///
    /// Every rejected combination is refused here, before any socket is
    /// opened.
    pub fn parse_line(&self, line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let mut words = line.split_whitespace();

        if words.next() != Some(self.grammar.program.as_str()) {
            return Err(CommandError::UnknownProgram);
        }

        match words.next() {
            None => Ok(Command::Usage),
            Some("help") => Ok(Command::Help(match words.next() {
                Some("get") => Some(Topic::Get),
                Some("post") => Some(Topic::Post),
                // Anything else falls back to the general screen.
                _ => None,
            })),
            Some("get") => self.parse_fetch(Method::Get, line),
            Some("post") => self.parse_fetch(Method::Post, line),
            Some(_) => Err(CommandError::UnknownCommand),
        }
    }

    /// Run one line to completion and print the outcome. Errors are
    /// printed, never propagated: the read loop must survive any bad
    /// command.
    pub async fn run_line(&self, line: &str) {
        match self.parse_line(line) {
            Ok(Command::Usage) => println!("{}", help::USAGE_HINT),
            Ok(Command::Help(topic)) => println!("{}", help::render(topic)),
            Ok(Command::Fetch { request, host, port, verbose }) => {
                self.execute(&request, &host, port, verbose).await;
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    fn parse_fetch(&self, method: Method, line: &str) -> Result<Command, CommandError> {
        let (target, span) = url::find(line).ok_or(CommandError::NoUrl)?;

        // Flags are lexed with the URL excised, so a trailing URL is never
        // swallowed as a flag parameter.
        let mut rest = line.to_string();
        rest.replace_range(span, " ");
        let flags = self.classify(method, lexer::lex(&rest))?;

        let mut builder = RequestBuilder::new(method, &target);
        for (name, value) in flags.headers {
            builder = builder.header(name, value);
        }

        if method == Method::Post {
            if flags.data.is_some() && flags.file.is_some() {
                return Err(CommandError::BodySourceConflict {
                    data_flag: self.grammar.data_flag.clone(),
                    file_flag: self.grammar.file_flag.clone(),
                });
            }
            if let Some(data) = flags.data {
                builder = builder.body(data.into_bytes());
            } else if let Some(path) = flags.file {
                let bytes = std::fs::read(&path)
                    .map_err(|source| CommandError::FileRead { path, source })?;
                builder = builder.body(bytes);
            }
        }

        let request = builder.build().map_err(CommandError::Build)?;
        Ok(Command::Fetch {
            request,
            host: target.host,
            port: target.port,
            verbose: flags.verbose,
        })
    }

    /// Sort raw flags into the grammar's categories, validating their
    /// parameters. Body-source flags belong to the POST grammar only; on
    /// GET they are ignored like any unrecognized flag. Repeated header
    /// flags accumulate in encounter order; repeated data or file flags
    /// are last-match-wins.
    fn classify(&self, method: Method, flags: Vec<RawFlag>) -> Result<ParsedFlags, CommandError> {
        let g = &self.grammar;
        let body_flags = method == Method::Post;

        let mut parsed = ParsedFlags {
            verbose: false,
            headers: Vec::new(),
            data: None,
            file: None,
        };

        for flag in flags {
            if flag.name == g.verbose_flag {
                parsed.verbose = true;
            } else if flag.name == g.header_flag {
                if flag.param.is_empty() {
                    return Err(CommandError::EmptyParameter { flag: flag.name });
                }
                let param = strip_quotes(&flag.param);
                let Some((name, value)) = param.split_once(':') else {
                    return Err(CommandError::MalformedHeader {
                        param: param.to_string(),
                    });
                };
                parsed.headers.push((name.trim().to_string(), value.trim().to_string()));
            } else if body_flags && flag.name == g.data_flag {
                if flag.param.is_empty() {
                    return Err(CommandError::EmptyParameter { flag: flag.name });
                }
                parsed.data = Some(strip_quotes(&flag.param).to_string());
            } else if body_flags && flag.name == g.file_flag {
                if flag.param.is_empty() {
                    return Err(CommandError::EmptyParameter { flag: flag.name });
                }
                parsed.file = Some(strip_quotes(&flag.param).to_string());
            } else {
                tracing::debug!(flag = %flag.name, "Ignoring unrecognized flag");
            }
        }

        Ok(parsed)
    }

    async fn execute(&self, request: &Request, host: &str, port: u16, verbose: bool) {
        let bytes = request.to_bytes();

        match net::send(host, port, &bytes, &self.config).await {
            Ok(raw) => {
                let response = Response::from_bytes(raw);
                match response.render(verbose) {
                    Ok(out) => println!("{out}"),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}
