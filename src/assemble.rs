// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page assembly
//!
//! Last-mile rewrites for pages served from a language subdirectory:
//! parent-relative asset paths, the language switcher, and the script that
//! persists the visitor's choice. Every injection keys off a literal marker
//! in the template and is skipped when the marker is missing.

/// A language's entry in the switcher dropdown.
#[derive(Debug, Clone)]
pub struct SwitcherEntry {
    pub code: String,
    pub flag: String,
    pub name: String,
}

/// Anchor for the switcher injection.
const NAV_MARKER: &str = r#"<div class="nav-links">"#;

/// Rewrite root-relative asset references for a page one level below the
/// site root.
pub fn localize_asset_paths(html: &str) -> String {
    html.replace(r#"href="styles.css""#, r#"href="../styles.css""#)
        .replace(r#"src="script.js""#, r#"src="../script.js""#)
}

/// Inject the language switcher dropdown after the navigation marker.
pub fn inject_language_switcher(html: &str, entries: &[SwitcherEntry], current: &str) -> String {
    if !html.contains(NAV_MARKER) {
        return html.to_string();
    }
    let switcher = render_switcher(entries, current);
    html.replacen(NAV_MARKER, &format!("{NAV_MARKER}\n{switcher}"), 1)
}

fn render_switcher(entries: &[SwitcherEntry], current: &str) -> String {
    let options: Vec<String> = entries
        .iter()
        .map(|entry| {
            let selected = if entry.code == current { " selected" } else { "" };
            format!(
                r#"              <option value="{}"{selected}>{} {}</option>"#,
                entry.code, entry.flag, entry.name
            )
        })
        .collect();
    format!(
        "<div class=\"language-switcher\">\n            \
         <select id=\"lang-select\" onchange=\"switchLanguage(this.value)\">\n{}\n            \
         </select>\n          </div>",
        options.join("\n")
    )
}

/// Inline handler backing the switcher: remembers the choice and navigates
/// to the picked language's subdirectory.
pub fn inject_switch_script(html: &str) -> String {
    if !html.contains("</body>") {
        return html.to_string();
    }
    let script = "\n    <script>\n      function switchLanguage(lang) {\n        \
                  localStorage.setItem('preferred-lang', lang);\n        \
                  window.location.href = '/' + lang + '/';\n      }\n    </script>";
    html.replacen("</body>", &format!("{script}\n  </body>"), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<SwitcherEntry> {
        vec![
            SwitcherEntry {
                code: "en".to_string(),
                flag: "🇬🇧".to_string(),
                name: "English".to_string(),
            },
            SwitcherEntry {
                code: "es".to_string(),
                flag: "🇪🇸".to_string(),
                name: "Español".to_string(),
            },
        ]
    }

    #[test]
    fn asset_paths_become_parent_relative() {
        let html = r#"<link href="styles.css" /><script src="script.js"></script>"#;
        let result = localize_asset_paths(html);
        assert!(result.contains(r#"href="../styles.css""#));
        assert!(result.contains(r#"src="../script.js""#));
    }

    #[test]
    fn switcher_injected_with_current_selected() {
        let html = r##"<nav><div class="nav-links"><a href="#">Home</a></div></nav>"##;
        let result = inject_language_switcher(html, &entries(), "es");
        assert!(result.contains(r#"<option value="es" selected>🇪🇸 Español</option>"#));
        assert!(result.contains(r#"<option value="en">🇬🇧 English</option>"#));
        assert!(result.contains(r#"onchange="switchLanguage(this.value)""#));
    }

    #[test]
    fn missing_nav_marker_skips_switcher() {
        let html = "<nav>no marker</nav>";
        assert_eq!(inject_language_switcher(html, &entries(), "es"), html);
    }

    #[test]
    fn switch_script_lands_before_body_close() {
        let html = "<body><p>content</p></body>";
        let result = inject_switch_script(html);
        assert!(result.contains("localStorage.setItem('preferred-lang', lang)"));
        let script_at = result.find("<script>").unwrap();
        let body_close_at = result.find("</body>").unwrap();
        assert!(script_at < body_close_at);
    }

    #[test]
    fn missing_body_close_skips_script() {
        let html = "<p>fragment without body</p>";
        assert_eq!(inject_switch_script(html), html);
    }
}
