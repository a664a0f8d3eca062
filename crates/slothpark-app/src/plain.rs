//! Line-oriented mode: page text, then a chat on stdin/stdout.
//!
//! Replies are streamed as the reveal ticks arrive, so the mascot types
//! exactly as slowly here as in the terminal UI.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

use slothpark_chat::{ChatPanel, ResponseCategory, RevealId, TickOutcome, TokioTicks};
use slothpark_core::{ChatConfig, Result};
use slothpark_site::SiteContent;
use slothpark_ui::{page_lines, Theme};

/// Run a plain session until `input` reaches EOF.
pub async fn run_plain<R, W>(
    site: &SiteContent,
    config: ChatConfig,
    input: R,
    mut out: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_page(site, &mut out).await?;

    let (ticks, mut rx) = TokioTicks::new();
    let mut panel = ChatPanel::new(config, ticks);
    panel.open();
    stream_reply(&mut panel, &mut rx, &mut out).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match submit_line(&mut panel, &line) {
            Ok(category) => {
                tracing::debug!(%category, "Message sent");
                stream_reply(&mut panel, &mut rx, &mut out).await?;
            }
            Err(e) if line.trim().is_empty() => tracing::debug!(error = %e, "Blank line skipped"),
            Err(e) => tracing::warn!(error = %e, "Line rejected"),
        }
    }

    panel.close();
    tracing::info!(messages = panel.messages().len(), "Plain session ended");
    Ok(())
}

/// Send one input line as a visitor message.
fn submit_line(panel: &mut ChatPanel, line: &str) -> Result<ResponseCategory> {
    panel.set_input(line)?;
    Ok(panel.submit()?)
}

async fn write_page<W: AsyncWrite + Unpin>(site: &SiteContent, out: &mut W) -> Result<()> {
    let header = format!("{} {}\n\n", site.header.emblem, site.header.title);
    out.write_all(header.as_bytes()).await?;
    for line in page_lines(site, &Theme::default()) {
        out.write_all(format!("{line}\n").as_bytes()).await?;
    }

    let footer = &site.footer;
    let footer = format!(
        "\n{}\n{}\nContact: {} | Phone: {}\n\n",
        footer.copyright, footer.address, footer.email, footer.phone
    );
    out.write_all(footer.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

async fn stream_reply<W: AsyncWrite + Unpin>(
    panel: &mut ChatPanel,
    rx: &mut UnboundedReceiver<RevealId>,
    out: &mut W,
) -> Result<()> {
    let prefix = format!("{}: ", panel.config().mascot_short_name());
    out.write_all(prefix.as_bytes()).await?;
    out.flush().await?;

    while panel.is_revealing() {
        let Some(id) = rx.recv().await else {
            break;
        };
        if let TickOutcome::Appended(ch) = panel.on_tick(id) {
            let mut buf = [0u8; 4];
            out.write_all(ch.encode_utf8(&mut buf).as_bytes()).await?;
            out.flush().await?;
        }
    }

    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slothpark_chat::candidates;
    use slothpark_core::SlothParkError;
    use tokio::io::BufReader;

    async fn session(input: &str) -> String {
        let mut out = Vec::new();
        run_plain(
            &SiteContent::sloth_park(),
            ChatConfig::default(),
            BufReader::new(input.as_bytes()),
            &mut out,
        )
        .await
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn replies(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter_map(|l| l.strip_prefix("Sammy: "))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_then_greeting() {
        let output = session("").await;
        assert!(output.starts_with("🦥 Sloth Park"));
        assert!(output.contains("The Night Watcher"));
        assert!(output.contains("Contact: info@slothpark.com"));

        let replies = replies(&output);
        assert_eq!(replies.len(), 1);
        assert!(candidates(ResponseCategory::Greeting).contains(&replies[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_line_gets_a_reply() {
        let output = session("when are you open?\nhow much are tickets?\n").await;
        let replies = replies(&output);
        assert_eq!(replies.len(), 3);
        assert!(candidates(ResponseCategory::Hours).contains(&replies[1]));
        assert!(candidates(ResponseCategory::Tickets).contains(&replies[2]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_lines_are_skipped() {
        let output = session("\n   \ntell me a fact\n").await;
        let replies = replies(&output);
        assert_eq!(replies.len(), 2);
        assert!(candidates(ResponseCategory::Facts).contains(&replies[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_takes_one_tick_per_char() {
        let start = tokio::time::Instant::now();
        let output = session("").await;
        let greeting = replies(&output)[0];
        let ticks = greeting.chars().count() as u32 + 1;
        assert_eq!(start.elapsed(), std::time::Duration::from_millis(100) * ticks);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlong_line_is_rejected_and_session_continues() {
        let long = "a".repeat(501);
        let output = session(&format!("{long}\nwhen are you open?\n")).await;
        let replies = replies(&output);
        assert_eq!(replies.len(), 2);
        assert!(candidates(ResponseCategory::Hours).contains(&replies[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_line_reports_chat_errors() {
        let (ticks, _rx) = TokioTicks::new();
        let mut panel = ChatPanel::new(ChatConfig::default(), ticks);

        let err = submit_line(&mut panel, "hello").unwrap_err();
        assert!(matches!(err, SlothParkError::Chat(_)));
        assert!(err.to_string().contains("chat panel is closed"));

        panel.open();
        let err = submit_line(&mut panel, "hello").unwrap_err();
        assert!(err.to_string().contains("still being revealed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_line_too_long() {
        let (ticks, _rx) = TokioTicks::new();
        let config = ChatConfig {
            max_input_chars: 5,
            ..Default::default()
        };
        let mut panel = ChatPanel::new(config, ticks);
        let err = submit_line(&mut panel, "way too long").unwrap_err();
        assert!(matches!(err, SlothParkError::Chat(ref m) if m.contains("maximum length of 5")));
    }
}
