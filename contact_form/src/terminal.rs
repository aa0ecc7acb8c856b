//! Interactive terminal front end for [`ContactFormPage`].

use contact_models::contact::ContactField;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    api::ContactApiService,
    page::{label, ContactFormPage},
    state::FormState,
};

const CONTINUE_PROMPT: &str = "続けて入力しますか？ [Y/n]: ";

/// Runs the form until the input is exhausted or the user stops after a
/// successful submission.
///
/// For every field the current value is kept when an empty line is entered.
pub async fn run<Api, R, W>(
    page: &mut ContactFormPage<Api>,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()>
where
    Api: ContactApiService,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        write_page(page, output).await?;

        for field in ContactField::ALL {
            let prompt = format!("{} [{}]: ", label(field), page.field(field));
            let Some(line) = prompt_line(&prompt, input, output).await? else {
                return Ok(());
            };
            if !line.is_empty() {
                page.set_field(field, line)?;
            }
        }

        let Some(submission) = page.begin_submit()? else {
            continue;
        };
        write_page(page, output).await?;

        let result = page.api().submit(&submission).await;
        page.finish_submit(result)?;

        if let FormState::Success { .. } = page.state() {
            write_page(page, output).await?;
            match prompt_line(CONTINUE_PROMPT, input, output).await? {
                Some(answer) if answer.eq_ignore_ascii_case("n") => return Ok(()),
                Some(_) => {}
                None => return Ok(()),
            }
        }
    }
}

async fn write_page<Api, W>(page: &ContactFormPage<Api>, output: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("\n{}\n\n", page.render()).as_bytes())
        .await?;
    output.flush().await?;
    Ok(())
}

/// Returns `None` at the end of the input. Line endings are stripped.
async fn prompt_line<R, W>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(prompt.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}
