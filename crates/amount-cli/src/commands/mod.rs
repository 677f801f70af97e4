use amount_core::SuffixPolicy;

use crate::app::AppContext;
use crate::ui::print_warning;

pub mod currencies;
pub mod format;
pub mod init;
pub mod misc;

/// Parse a `--suffix` value. Unknown names fall back to `none` with a
/// warning on stderr.
fn suffix_from_flag(ctx: &AppContext, name: &str) -> SuffixPolicy {
    let policy = SuffixPolicy::from_name(name);
    if policy.as_str() != name.trim().to_ascii_lowercase() && !ctx.quiet() {
        print_warning(
            &ctx.diagnostics_context(),
            &format!("Unknown suffix policy '{}', using {}", name, policy),
        );
    }
    policy
}
