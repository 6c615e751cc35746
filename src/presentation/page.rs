use ammonia::clean_text;
use serde_json::json;

use crate::lifecycle::models::notification::{Notification, NOTIFICATION_DURATION_MS};

use super::{
    enums::submit_label::SubmitLabel,
    prompt_form::{COPIED_DESCRIPTION, COPIED_TITLE, COPY_FAILED_DESCRIPTION, COPY_FAILED_TITLE},
    surprise::PLACEHOLDER_PROMPT,
    view::{Output, View, EMPTY_HINT},
};

static STYLE: &str = r#"
:root { color-scheme: light; --bg: #ffffff; --fg: #0a0a0a; --muted: #f4f4f5; --muted-fg: #71717a; --border: #e4e4e7; }
html.dark { color-scheme: dark; --bg: #0a0a0a; --fg: #fafafa; --muted: #27272a; --muted-fg: #a1a1aa; --border: #27272a; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); }
nav { max-width: 56rem; margin: 1rem auto; padding: 0.5rem 1rem; background: var(--muted); border: 1px solid var(--border); border-radius: 9999px; }
nav a { color: inherit; }
main { max-width: 56rem; margin: 0 auto; padding: 1rem; }
.output { min-height: 512px; border-radius: 0.75rem; background: var(--muted); padding: 1rem; display: flex; flex-direction: column; align-items: center; justify-content: flex-start; }
.output.centered { justify-content: center; }
.output img { max-width: 100%; height: auto; border-radius: 0.5rem; }
.muted { color: var(--muted-fg); }
.error { color: #ef4444; }
form { max-width: 42rem; margin: 2rem auto; padding: 1rem; border: 1px solid var(--border); border-radius: 0.5rem; display: flex; flex-direction: column; gap: 1rem; }
textarea { resize: none; border: 0; font-size: 1.125rem; line-height: 2.5; background: transparent; color: inherit; }
.actions { display: flex; justify-content: space-between; align-items: center; }
.toast { position: fixed; right: 1rem; bottom: 1rem; padding: 1rem; border: 1px solid var(--border); border-radius: 0.5rem; background: var(--bg); }
.toast.destructive { background: #ef4444; color: #ffffff; }
"#;

// Keyboard shortcuts, the live surprise/generate button and clipboard
// feedback. Mirrors `PromptForm::on_key` and `PromptForm::copy`.
static SCRIPT: &str = r#"
(() => {
  const form = document.querySelector("form");
  const prompt = form.elements.prompt;
  const submit = form.querySelector("button[type=submit]");

  const toast = (variant, notification) => {
    const element = document.createElement("div");
    element.className = "toast " + variant;
    element.setAttribute("role", "status");
    const title = document.createElement("strong");
    title.textContent = notification.title;
    const description = document.createElement("p");
    description.textContent = notification.description;
    element.append(title, description);
    document.body.append(element);
    setTimeout(() => element.remove(), config.duration);
  };

  const sync = () => {
    if (prompt.disabled) return;
    const label = prompt.value === "" ? config.surpriseMe : config.generate;
    submit.textContent = label.text;
    submit.title = label.tooltip;
    if (prompt.value === "") {
      submit.name = "surprise";
      submit.value = "true";
    } else {
      submit.removeAttribute("name");
    }
  };

  prompt.addEventListener("input", sync);
  prompt.addEventListener("keydown", (event) => {
    if (event.key === "Enter" && !event.shiftKey) {
      event.preventDefault();
      if (!prompt.disabled) form.requestSubmit(submit);
    } else if (event.key === "Tab" && prompt.value === "") {
      event.preventDefault();
      prompt.value = config.placeholder;
      sync();
    }
  });

  const copy = form.querySelector("button[data-copy]");
  if (copy) {
    copy.addEventListener("click", () => {
      Promise.resolve()
        .then(() => navigator.clipboard.writeText(prompt.value))
        .then(() => toast("default", config.copied), () => toast("destructive", config.copyFailed));
    });
  }
})();
"#;

fn render_script() -> String {
    let config = json!({
        "placeholder": PLACEHOLDER_PROMPT,
        "surpriseMe": {
            "text": SubmitLabel::SurpriseMe.value(),
            "tooltip": SubmitLabel::SurpriseMe.tooltip(),
        },
        "generate": {
            "text": SubmitLabel::Generate.value(),
            "tooltip": SubmitLabel::Generate.tooltip(),
        },
        "copied": { "title": COPIED_TITLE, "description": COPIED_DESCRIPTION },
        "copyFailed": { "title": COPY_FAILED_TITLE, "description": COPY_FAILED_DESCRIPTION },
        "duration": NOTIFICATION_DURATION_MS,
    });

    format!(
        "<script>\nconst config = {};\n{}</script>\n",
        config.to_string().replace("</", "<\\/"),
        SCRIPT
    )
}

pub fn render_page(view: &View, notifications: &[Notification]) -> String {
    let theme = view.theme.value();
    let home = format!("/?theme={}&seed={}", theme, view.seed);
    let toggle = format!("/?theme={}&seed={}", view.theme.toggled().value(), view.seed);

    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"en\" class=\"{}\">\n", theme));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Image generator</title>\n");
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    html.push_str(&format!(
        "<nav><a href=\"{}\" aria-label=\"Toggle theme\">Toggle theme</a></nav>\n",
        clean_text(&toggle)
    ));

    html.push_str("<main>\n");
    html.push_str(&render_output(view));
    html.push_str(&render_form(view, &home));
    html.push_str("</main>\n");

    for notification in notifications {
        html.push_str(&format!(
            "<div class=\"toast {}\" role=\"status\" data-duration=\"{}\"><strong>{}</strong><p>{}</p></div>\n",
            notification.variant.value(),
            notification.duration_ms,
            clean_text(&notification.title),
            clean_text(&notification.description)
        ));
    }

    html.push_str(&render_script());
    html.push_str("</body>\n</html>\n");
    html
}

fn render_output(view: &View) -> String {
    let class = match view.centered {
        true => "output centered",
        false => "output",
    };

    let content = match &view.output {
        Output::Empty => format!("<p class=\"muted\">{}</p>", EMPTY_HINT),
        Output::Loading => "<p>Generating...</p>".to_string(),
        Output::Image {
            src,
            alt,
            width,
            height,
            elapsed_time,
        } => {
            let mut content = format!(
                "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">",
                clean_text(src),
                clean_text(alt),
                width,
                height
            );
            if let Some(elapsed_time) = elapsed_time {
                content.push_str(&format!(
                    "<p class=\"muted\">Generated in {}</p>",
                    clean_text(elapsed_time)
                ));
            }
            content
        }
        Output::Error(reason) => format!("<p class=\"error\">{}</p>", clean_text(reason)),
    };

    format!("<div class=\"{}\">{}</div>\n", class, content)
}

fn render_form(view: &View, home: &str) -> String {
    let disabled = match view.input_disabled {
        true => " disabled",
        false => "",
    };
    let placeholder = match view.placeholder {
        Some(placeholder) => format!(" placeholder=\"{} (Tab)\"", clean_text(placeholder)),
        None => String::new(),
    };

    let mut form = String::new();
    form.push_str("<form method=\"post\" action=\"/\">\n");
    form.push_str(&format!(
        "<input type=\"hidden\" name=\"theme\" value=\"{}\">\n",
        view.theme.value()
    ));
    form.push_str(&format!(
        "<input type=\"hidden\" name=\"seed\" value=\"{}\">\n",
        view.seed
    ));
    form.push_str(&format!(
        "<textarea name=\"prompt\" rows=\"2\"{}{}>{}</textarea>\n",
        placeholder,
        disabled,
        clean_text(&view.prompt)
    ));

    if let Some(field_error) = &view.field_error {
        form.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            clean_text(field_error)
        ));
    }

    form.push_str("<div class=\"actions\"><div>");
    if view.show_prompt_actions {
        form.push_str(&format!(
            "<button type=\"button\" title=\"Copy prompt\" data-copy{}>Copy</button> ",
            disabled
        ));
        form.push_str(&format!(
            "<a href=\"{}\" title=\"Restart\">Restart</a>",
            clean_text(home)
        ));
    }
    form.push_str("</div>");

    let surprise = match view.submit_label {
        SubmitLabel::SurpriseMe => " name=\"surprise\" value=\"true\"",
        _ => "",
    };
    form.push_str(&format!(
        "<button type=\"submit\" title=\"{}\"{}{}>{}</button>",
        view.submit_label.tooltip(),
        surprise,
        disabled,
        view.submit_label.value()
    ));
    form.push_str("</div>\n</form>\n");

    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generations::models::generated_image::GeneratedImage,
        lifecycle::enums::lifecycle_state::LifecycleState,
        presentation::{
            enums::theme::Theme, models::view_context::ViewContext, prompt_form::PromptForm, view,
        },
    };

    fn render(state: LifecycleState, prompt: &str, theme: Theme) -> String {
        let mut form = PromptForm::default();
        form.edit(prompt);
        let view = view::render(
            &state,
            Some(prompt),
            &form,
            None,
            &ViewContext::new(theme, 5),
        );

        render_page(&view, &[])
    }

    #[test]
    fn idle_page_offers_surprise_me() {
        let page = render(LifecycleState::Idle, "", Theme::Light);

        assert!(page.contains(EMPTY_HINT));
        assert!(page.contains("name=\"surprise\""));
        assert!(page.contains(">Surprise me</button>"));
        assert!(page.contains("<html lang=\"en\" class=\"light\">"));
        assert!(!page.contains("Restart"));
    }

    #[test]
    fn succeeded_page_shows_the_image_at_fixed_size() {
        let image = GeneratedImage::from_png_bytes(b"png", Some("2.1s".to_string()));
        let page = render(
            LifecycleState::Succeeded(image),
            "A koala chilling on a tree",
            Theme::Dark,
        );

        assert!(page.contains("<img src=\"data:image&#47;png;base64,cG5n\""));
        assert!(page.contains("width=\"512\" height=\"512\""));
        assert!(page.contains("Generated in 2.1s"));
        assert!(page.contains(">Generate</button>"));
        assert!(page.contains("class=\"dark\""));
        assert!(page.contains("Restart"));
    }

    #[test]
    fn user_text_is_escaped() {
        let page = render(
            LifecycleState::Failed("<b>nope</b>".to_string()),
            "<script>alert(1)</script>",
            Theme::Light,
        );

        assert!(!page.contains("<script>alert"));
        assert!(!page.contains("<b>nope"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn pending_page_disables_the_form() {
        let page = render(LifecycleState::Pending, "ab", Theme::Light);

        assert!(page.contains("<p>Generating...</p>"));
        assert!(page.contains(" disabled>Generating...</button>"));
    }

    #[test]
    fn page_script_wires_keyboard_and_copy_feedback() {
        let page = render(LifecycleState::Idle, "ab", Theme::Light);

        assert!(page.contains("data-copy"));
        assert!(page.contains("event.key === \"Enter\" && !event.shiftKey"));
        assert!(page.contains("form.requestSubmit(submit)"));
        assert!(page.contains("\"placeholder\":\"A koala chilling on a tree\""));
        assert!(page.contains("\"copyFailed\":{"));
        assert!(page.contains("\"title\":\"Failed to copy text\""));
        assert!(page.contains("toast(\"destructive\", config.copyFailed)"));
    }

    #[test]
    fn notifications_render_as_toasts() {
        let view = view::render(
            &LifecycleState::Idle,
            None,
            &PromptForm::default(),
            None,
            &ViewContext::new(Theme::Light, 0),
        );

        let page = render_page(
            &view,
            &[Notification::failure("Failed to copy text", "Please try again.")],
        );

        assert!(page.contains("class=\"toast destructive\""));
    }
}
