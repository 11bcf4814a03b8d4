//! Post-action hooks keyed by build target.
//!
//! Actions are registered against a target pattern such as
//! `$BUILD_DIR/${PROGNAME}.hex`. Patterns are expanded against [`Config`]
//! when a target finishes building, so registration does not need the
//! configuration up front.

use anyhow::{bail, Context, Result};
use std::path::{Component, Path, PathBuf};

use crate::config::Config;

/// Outputs of a finished build step, in the order the step produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    pub targets: Vec<PathBuf>,
}

impl BuildContext {
    /// Context for a step with the given outputs.
    pub fn new(targets: Vec<PathBuf>) -> Self {
        Self { targets }
    }

    /// Context for a step with a single output.
    pub fn single(target: impl Into<PathBuf>) -> Self {
        Self {
            targets: vec![target.into()],
        }
    }

    /// The primary output (first target), if any.
    pub fn source(&self) -> Option<&Path> {
        self.targets.first().map(PathBuf::as_path)
    }
}

/// Callback run after a target is built.
pub type PostAction = Box<dyn Fn(&BuildContext) -> Result<()>>;

/// Anything that accepts post-action registrations.
pub trait PostActionRegistrar {
    fn add_post_action(&mut self, key: &str, action: PostAction);
}

struct Hook {
    key: String,
    action: PostAction,
}

/// Ordered set of post-actions, fired sequentially.
pub struct HookRegistry {
    config: Config,
    hooks: Vec<Hook>,
}

impl HookRegistry {
    /// Create an empty registry expanding keys against `config`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            hooks: Vec::new(),
        }
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Expand a hook key into the target path it stands for.
    pub fn expand(&self, key: &str) -> Result<PathBuf> {
        expand_key(key, &self.config).map(PathBuf::from)
    }

    /// Run every action registered for `target`, in registration order.
    ///
    /// Stops at the first failing action. Keys that fail to expand cannot
    /// name `target` and are skipped with a warning. Returns how many
    /// actions ran.
    pub fn fire(&self, target: &Path, ctx: &BuildContext) -> Result<usize> {
        let mut fired = 0;
        for hook in &self.hooks {
            match self.expand(&hook.key) {
                Ok(path) if same_target(&path, target) => {}
                Ok(_) => continue,
                Err(e) => {
                    eprintln!("[WARN] Skipping post-action: {:#}", e);
                    continue;
                }
            }
            (hook.action)(ctx)
                .with_context(|| format!("Post-action for '{}' failed", hook.key))?;
            fired += 1;
        }
        Ok(fired)
    }
}

impl PostActionRegistrar for HookRegistry {
    fn add_post_action(&mut self, key: &str, action: PostAction) {
        self.hooks.push(Hook {
            key: key.to_string(),
            action,
        });
    }
}

/// Compare target paths, ignoring `.` components.
pub fn same_target(a: &Path, b: &Path) -> bool {
    fn significant(p: &Path) -> impl Iterator<Item = Component<'_>> {
        p.components().filter(|c| *c != Component::CurDir)
    }
    significant(a).eq(significant(b))
}

/// Substitute `$NAME` and `${NAME}` placeholders with configuration values.
///
/// A `$` not followed by a variable name is kept literally.
pub fn expand_key(key: &str, config: &Config) -> Result<String> {
    let mut out = String::with_capacity(key.len());
    let mut rest = key;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            let Some(end) = braced.find('}') else {
                bail!("Unterminated '${{' in hook key '{}'", key);
            };
            (&braced[..end], end + 2)
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        if name.is_empty() {
            out.push('$');
            rest = after;
            continue;
        }

        match config.var(name) {
            Some(value) => out.push_str(value),
            None => bail!("Unknown variable '{}' in hook key '{}'", name, key),
        }
        rest = &after[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}
