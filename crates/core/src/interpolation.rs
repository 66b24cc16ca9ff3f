use std::collections::HashMap;

use leon::Template;

use crate::error::Result;

/// Placeholder the task name is substituted for in history command templates.
pub const TASK_PLACEHOLDER: &str = "task";

/// Renders the command line that reproduces running `task_name`, e.g.
/// `xc {task}` becomes `xc build`.
///
/// # Errors
///
/// Returns an error if the template cannot be parsed or references a
/// placeholder other than `{task}`.
pub fn render_history_command(template: &str, task_name: &str) -> Result<String> {
    let template = Template::parse(template)?;

    let mut context: HashMap<String, String> = HashMap::new();
    context.insert(TASK_PLACEHOLDER.to_string(), task_name.to_string());

    Ok(template.render(&context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_default_template() {
        assert_eq!(
            render_history_command("xc {task}", "build").unwrap(),
            "xc build"
        );
    }

    #[test]
    fn test_render_custom_template() {
        assert_eq!(
            render_history_command("xc -file tasks.md {task}", "lint").unwrap(),
            "xc -file tasks.md lint"
        );
    }

    #[test]
    fn test_render_unknown_placeholder() {
        let result = render_history_command("xc {name}", "build");
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_render_unbalanced_template() {
        let result = render_history_command("xc {task", "build");
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
