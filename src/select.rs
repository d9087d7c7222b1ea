use std::io::Write;
use std::path::Path;

use crate::worktree::{Worktree, is_same_path};

/// Injectable answer policy for every interactive gate. The default reads
/// the terminal; tests script it. EOF counts as a decline.
pub trait Prompter {
    fn confirm(&mut self, question: &str) -> bool;
    /// Answer to a numbered menu of `count` items, as typed.
    fn choose(&mut self, count: usize) -> Option<String>;
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        eprint!("arbor: {question} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).unwrap_or(0) == 0 {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }

    fn choose(&mut self, count: usize) -> Option<String> {
        eprint!("arbor: select [1-{count}]: ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).unwrap_or(0) == 0 {
            return None;
        }
        Some(answer.trim().to_string())
    }
}

/// Resolve a possibly ambiguous worktree reference to exactly one target.
///
/// The primary worktree is never a candidate. `filter` is a substring match
/// against branch name or path. One survivor is taken without prompting;
/// several go to a numbered menu.
pub fn select<'a>(
    worktrees: &'a [Worktree],
    primary: &Path,
    filter: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<&'a Worktree, String> {
    let candidates: Vec<&Worktree> = worktrees
        .iter()
        .filter(|wt| !is_same_path(&wt.path, primary))
        .filter(|wt| match filter {
            Some(f) => {
                wt.branch_name().contains(f) || wt.path.to_string_lossy().contains(f)
            }
            None => true,
        })
        .collect();

    match candidates.as_slice() {
        [] => match filter {
            Some(f) => Err(format!("no worktree matches '{f}'")),
            None => Err("no feature worktrees".into()),
        },
        [one] => Ok(*one),
        several => {
            for (i, wt) in several.iter().enumerate() {
                let branch = if wt.branch_name().is_empty() {
                    "(detached)"
                } else {
                    wt.branch_name()
                };
                eprintln!("  {}) {} ({})", i + 1, branch, wt.path.display());
            }
            let answer = prompter
                .choose(several.len())
                .ok_or_else(|| "selection aborted".to_string())?;
            let index: usize = answer
                .parse()
                .map_err(|_| format!("invalid selection: {answer}"))?;
            if index == 0 || index > several.len() {
                return Err(format!("invalid selection: {answer}"));
            }
            Ok(several[index - 1])
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::Prompter;

    /// Scripted policy: fixed confirm answer, queued menu answers.
    pub struct Scripted {
        pub confirm_answer: bool,
        pub choices: Vec<String>,
    }

    impl Scripted {
        pub fn confirming() -> Self {
            Self {
                confirm_answer: true,
                choices: Vec::new(),
            }
        }

        pub fn declining() -> Self {
            Self {
                confirm_answer: false,
                choices: Vec::new(),
            }
        }

        pub fn choosing(answer: &str) -> Self {
            Self {
                confirm_answer: false,
                choices: vec![answer.to_string()],
            }
        }
    }

    impl Prompter for Scripted {
        fn confirm(&mut self, _question: &str) -> bool {
            self.confirm_answer
        }

        fn choose(&mut self, _count: usize) -> Option<String> {
            if self.choices.is_empty() {
                None
            } else {
                Some(self.choices.remove(0))
            }
        }
    }
}
