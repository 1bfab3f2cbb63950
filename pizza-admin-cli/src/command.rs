//! Operator command parsing
//!
//! One line of input becomes a [`Command`]; row numbers are 1-based as
//! printed by the view and are resolved against the rows currently shown.

use anyhow::{anyhow, bail, Result};
use pizza_admin_core::services::{DashboardAction, Tab};
use pizza_admin_core::types::{Franchise, User};

pub const HELP: &str = "\
commands:
  tab [franchises|users]        switch tab (no argument: next tab)
  next | prev                   page forward / back
  page <n>                      jump to page n (1-based)
  filter [text]                 filter by name (empty: show all)
  delete <row>                  delete the user, or close the franchise, in <row>
  close-franchise <row>         close the franchise in <row>
  close-store <row> <store>     close store number <store> of the franchise in <row>
  refresh                       reload the current page
  dismiss                       hide the error banner
  help                          show this text
  quit                          leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tab(Option<Tab>),
    Next,
    Prev,
    Page(u32),
    Filter(String),
    Delete(usize),
    CloseFranchise(usize),
    CloseStore { row: usize, store: usize },
    Refresh,
    Dismiss,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "tab" | "t" => {
                if rest.is_empty() {
                    Self::Tab(None)
                } else {
                    Self::Tab(Some(rest.parse::<Tab>().map_err(|e| anyhow!(e))?))
                }
            }
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "page" => {
                let page = number(rest, "page")?;
                Self::Page(u32::try_from(page - 1)?)
            }
            // raw text is kept; the controller trims and wraps it
            "filter" | "f" => Self::Filter(rest.to_string()),
            "delete" | "d" => Self::Delete(number(rest, "row")?),
            "close-franchise" => Self::CloseFranchise(number(rest, "row")?),
            "close-store" => {
                let mut args = rest.split_whitespace();
                let row = number(args.next().unwrap_or_default(), "row")?;
                let store = number(args.next().unwrap_or_default(), "store")?;
                Self::CloseStore { row, store }
            }
            "refresh" | "r" => Self::Refresh,
            "dismiss" => Self::Dismiss,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("unknown command '{other}', try 'help'"),
        };
        Ok(Some(command))
    }

    /// Turn the command into a dashboard action using the rows on screen.
    ///
    /// `Help` and `Quit` have no action and yield `Ok(None)`.
    pub fn into_action(
        self,
        tab: Tab,
        franchises: &[Franchise],
        users: &[User],
    ) -> Result<Option<DashboardAction>> {
        let action = match self {
            Self::Tab(None) => DashboardAction::NextTab,
            Self::Tab(Some(tab)) => DashboardAction::SelectTab(tab),
            Self::Next => DashboardAction::NextPage,
            Self::Prev => DashboardAction::PreviousPage,
            Self::Page(page) => DashboardAction::SetPage(page),
            Self::Filter(text) => DashboardAction::SubmitFilter(text),
            Self::Refresh => DashboardAction::Refresh,
            Self::Dismiss => DashboardAction::DismissNotice,
            Self::Delete(row) => match tab {
                Tab::Users => DashboardAction::DeleteUser(pick(users, row, "user")?.clone()),
                Tab::Franchises => {
                    DashboardAction::CloseFranchise(pick(franchises, row, "franchise")?.clone())
                }
            },
            Self::CloseFranchise(row) => {
                require_franchises(tab)?;
                DashboardAction::CloseFranchise(pick(franchises, row, "franchise")?.clone())
            }
            Self::CloseStore { row, store } => {
                require_franchises(tab)?;
                let franchise = pick(franchises, row, "franchise")?;
                let target = pick(&franchise.stores, store, "store")?;
                DashboardAction::CloseStore {
                    franchise_id: franchise.id.clone(),
                    store_id: target.id.clone(),
                }
            }
            Self::Help | Self::Quit => return Ok(None),
        };
        Ok(Some(action))
    }
}

fn number(raw: &str, what: &str) -> Result<usize> {
    let n: usize = raw
        .trim()
        .parse()
        .map_err(|_| anyhow!("expected a {what} number, got '{raw}'"))?;
    if n == 0 {
        bail!("{what} numbers start at 1");
    }
    Ok(n)
}

fn pick<'a, T>(rows: &'a [T], n: usize, what: &str) -> Result<&'a T> {
    rows.get(n - 1)
        .ok_or_else(|| anyhow!("no {what} {n} on this page ({} shown)", rows.len()))
}

fn require_franchises(tab: Tab) -> Result<()> {
    if tab == Tab::Franchises {
        Ok(())
    } else {
        bail!("switch to the franchises tab first")
    }
}
