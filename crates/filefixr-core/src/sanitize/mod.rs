/// Name sanitizer — pure functions mapping a raw file or directory name to
/// one that is safe on every common filesystem.
///
/// No filesystem access happens here; the renamer decides what to do with
/// the result. Both functions are total: every input, including the empty
/// string, produces an output, and applying them twice gives the same
/// result as applying them once.
///
/// # File names
///
/// 1. `: / \ ~` become `-`.
/// 2. Characters outside the allow-list (see [`charset::is_allowed`]) are
///    removed.
/// 3. The name is split into base and extension at the last dot.
/// 4. Spaces are trimmed from both ends of the base.
/// 5. Runs of dots in the base collapse to one and a trailing dot is
///    dropped.
///
/// Steps 3–5 repeat until the name stops changing. A single pass can
/// expose a new trailing space (`"a ..b"` → `"a .b"`), and repeating keeps
/// the sanitizer idempotent.
///
/// # Directory names
///
/// Substitution and filtering as above, then surrounding spaces trimmed.
/// Dots are left alone: a directory has no extension to protect.
pub mod charset;

use charset::{is_allowed, substitute};

/// Sanitize a file name.
///
/// ```
/// use filefixr_core::sanitize::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("My:File~Name.txt"), "My-File-Name.txt");
/// assert_eq!(sanitize_file_name("Report....final..txt"), "Report.final.txt");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    let mut current = filter_characters(name);
    loop {
        let next = tidy_base(&current);
        // Every step after filtering only removes characters, so an
        // unchanged length means an unchanged name.
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

/// Sanitize a directory name.
///
/// ```
/// use filefixr_core::sanitize::sanitize_dir_name;
///
/// assert_eq!(sanitize_dir_name("  Photos: 2024?  "), "Photos- 2024");
/// assert_eq!(sanitize_dir_name("v1..2"), "v1..2");
/// ```
pub fn sanitize_dir_name(name: &str) -> String {
    filter_characters(name).trim_matches(' ').to_string()
}

/// Split a name into `(base, extension)` at the last dot.
///
/// The extension keeps its leading dot. A name whose only dots are leading
/// ones (`.bashrc`, `..`) has no extension, and neither has a name without
/// any dot.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => name.split_at(dot),
        _ => (name, ""),
    }
}

/// Substitute then drop everything outside the allow-list.
fn filter_characters(name: &str) -> String {
    name.chars().map(substitute).filter(|&c| is_allowed(c)).collect()
}

/// One pass of base tidying: trim spaces, collapse dots, drop trailing dot.
fn tidy_base(name: &str) -> String {
    let (base, extension) = split_extension(name);
    let base = base.trim_matches(' ');

    let mut tidied = String::with_capacity(name.len());
    for c in base.chars() {
        if c == '.' && tidied.ends_with('.') {
            continue;
        }
        tidied.push(c);
    }
    let kept = tidied.trim_end_matches('.').len();
    tidied.truncate(kept);

    tidied.push_str(extension);
    tidied
}
