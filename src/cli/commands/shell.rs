//! `upkeep shell` command - Interactive session over one workspace
//!
//! Every other command starts from a fresh workspace; the shell keeps one
//! alive so searches, filters, sorts and edits accumulate. Lines come from
//! a script file, the terminal, or piped stdin.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use crate::cli::commands::{delete, edit, list, new, pages, schema, show};
use crate::cli::helpers::{load_config, open_workspace, plural};
use crate::cli::prompt::FormWizard;
use crate::cli::GlobalOpts;
use crate::core::form::FormInput;
use crate::core::workspace::{EntityKind, Workspace};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct ShellArgs {
    /// Run the commands in this file instead of reading stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  pages                    list the collections (active one marked)
  use <entity>             switch to another collection
  list                     show the current view
  search [text...]         set the search text (no text clears it)
  filter <field> [value]   set a filter (no value clears it)
  sort <field>             sort by a column; again to flip direction (reset clears sorting)
  reset                    clear search, filters and sort
  show <id>                show one record
  new [field=value...]     create a record
  edit <id> [field=value...]
  delete <id>
  schema                   describe the fields of the collection
  help
  quit";

pub fn run(args: ShellArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let workspace = open_workspace(global, &config);
    let mut session = Session::new(workspace, global.clone(), config);

    if let Some(path) = &args.script {
        let file = File::open(path)
            .map_err(|e| miette::miette!("Cannot open script {}: {}", path.display(), e))?;
        return session.run_lines(BufReader::new(file).lines(), false);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    session.interactive = interactive;
    if interactive && !global.quiet {
        eprintln!(
            "{} {}",
            style("Upkeep Console").bold(),
            style("(type 'help' for commands, 'quit' to leave)").dim()
        );
    }
    session.run_lines(stdin.lock().lines(), interactive)
}

/// Whether the session keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A workspace plus the options every command line is run with
pub struct Session {
    workspace: Workspace,
    global: GlobalOpts,
    config: Config,
    /// Prompt with the form wizard when `new`/`edit` get no fields
    interactive: bool,
}

impl Session {
    pub fn new(workspace: Workspace, global: GlobalOpts, config: Config) -> Self {
        Self {
            workspace,
            global,
            config,
            interactive: false,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Execute lines until they run out or `quit` is read
    ///
    /// A failing line is reported and the session goes on. Non-interactive
    /// sessions fail at the end if any line failed.
    pub fn run_lines<I>(&mut self, lines: I, prompt: bool) -> Result<()>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let mut failures = 0usize;
        let mut lines = lines;
        loop {
            if prompt {
                eprint!("upkeep:{}> ", self.workspace.active());
                io::stderr().flush().into_diagnostic()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line.into_diagnostic()?;

            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    failures += 1;
                    eprintln!("{} {}", style("error:").red().bold(), e);
                }
            }
        }

        if failures > 0 && !prompt {
            return Err(miette::miette!("{} failed", plural(failures, "command")));
        }
        Ok(())
    }

    /// Execute one command line
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let words = split_words(line)?;
        let Some((command, rest)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        tracing::trace!("shell [{}]: {}", self.workspace.active(), line.trim());

        let kind = self.workspace.active();
        match command.to_lowercase().as_str() {
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            "help" | "?" => println!("{}", HELP),
            "pages" => pages::print_pages(&self.workspace, &self.global, &self.config, true)?,
            "use" | "page" => {
                let target = single_arg(command, rest, "<entity>")?;
                let kind: EntityKind = target.parse().map_err(|e: String| miette::miette!(e))?;
                self.workspace.select(kind);
                self.print_view()?;
            }
            "list" | "ls" => self.print_view()?,
            "search" => {
                self.workspace.current_mut().set_search(&raw_argument(line));
                self.print_view()?;
            }
            "filter" => {
                let (field, value) = rest
                    .split_first()
                    .ok_or_else(|| miette::miette!("Usage: filter <field> [value]"))?;
                let value = value.join(" ");
                let value = (!value.is_empty()).then_some(value.as_str());
                self.workspace
                    .current_mut()
                    .set_filter(field, value)
                    .into_diagnostic()?;
                self.print_view()?;
            }
            "sort" => {
                let field = single_arg(command, rest, "<field>")?;
                self.workspace
                    .current_mut()
                    .activate_sort(field)
                    .into_diagnostic()?;
                self.print_view()?;
            }
            "reset" => {
                self.workspace.current_mut().reset();
                self.print_view()?;
            }
            "show" => {
                let id = single_arg(command, rest, "<id>")?;
                let page = self.workspace.current();
                let row = show::find_row(page, kind, id)?;
                show::print_record(page, &row, &self.global, &self.config)?;
            }
            "new" | "add" => {
                let input = if rest.is_empty() && self.interactive {
                    FormWizard::new().run(kind.schema(), None)?
                } else {
                    FormInput::parse(rest).into_diagnostic()?
                };
                let page = self.workspace.current_mut();
                let row = new::create(page, &input, &self.global)?;
                show::print_record(page, &row, &self.global, &self.config)?;
            }
            "edit" => {
                let (id, fields) = rest
                    .split_first()
                    .ok_or_else(|| miette::miette!("Usage: edit <id> [field=value...]"))?;
                let page = self.workspace.current_mut();
                let existing = show::find_row(page, kind, id)?;
                let input = if fields.is_empty() && self.interactive {
                    FormWizard::new().run(kind.schema(), Some(&existing))?
                } else if fields.is_empty() {
                    return Err(miette::miette!("Usage: edit <id> field=value..."));
                } else {
                    FormInput::parse(fields).into_diagnostic()?
                };
                let row = edit::edit(page, &existing, &input, &self.global)?;
                show::print_record(page, &row, &self.global, &self.config)?;
            }
            "delete" | "rm" => {
                let id = single_arg(command, rest, "<id>")?;
                delete::delete(self.workspace.current_mut(), kind, id, &self.global)?;
            }
            "schema" => schema::print_schema(kind.schema(), &self.global, &self.config)?,
            other => {
                return Err(miette::miette!(
                    "Unknown command '{}'. Type 'help' for the list",
                    other
                ))
            }
        }
        Ok(Flow::Continue)
    }

    fn print_view(&self) -> Result<()> {
        let page = self.workspace.current();
        if !self.global.quiet {
            if let Some(state) = list::describe_state(page) {
                eprintln!("{} {}", style(page.schema().title).bold(), style(state).dim());
            }
        }
        list::print_view(page, &self.global, &self.config, None)
    }
}

fn single_arg<'a>(command: &str, rest: &'a [String], what: &str) -> Result<&'a str> {
    match rest {
        [one] => Ok(one.as_str()),
        _ => Err(miette::miette!("Usage: {} {}", command, what)),
    }
}

/// Everything after the command word, as typed
///
/// Inner spacing is kept; one pair of quotes around the whole text is
/// removed.
fn raw_argument(line: &str) -> String {
    let rest = line
        .trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .unwrap_or("");
    for q in ['"', '\''] {
        if let Some(inner) = rest.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner.to_string();
        }
    }
    rest.to_string()
}

/// Split a command line into words
///
/// Single or double quotes group words. A line starting with `#` is a
/// comment.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    if line.trim_start().starts_with('#') {
        return Ok(Vec::new());
    }
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(miette::miette!("Unterminated quote in: {}", line.trim()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
