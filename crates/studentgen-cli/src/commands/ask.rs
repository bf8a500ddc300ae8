//! The `studentgen ask` command.

use anyhow::Result;

use studentgen_core::{answer, Answer, AnswerError, Query};

use super::Context;

pub async fn execute(ctx: &Context, question: &str, json: bool) -> Result<()> {
    let config = ctx.load_config()?;
    let storage = ctx.open_store(&config).await?;
    let records = storage.list_students().await?;

    let reply = match answer(question, &records) {
        Ok(reply) => reply,
        Err(AnswerError::NoData { query }) => anyhow::bail!(
            "no student data to answer \"{query}\"; run `studentgen generate` first"
        ),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    let heading = Query::parse(question).map(Query::label).unwrap_or("Answer");
    print_answer(heading, &reply);
    Ok(())
}

fn print_answer(heading: &str, reply: &Answer) {
    match reply {
        Answer::Scalar(sentence) => println!("{sentence}"),
        Answer::List(items) => {
            println!("{heading}:");
            for item in items {
                println!("  {item}");
            }
        }
        Answer::Frequency(distribution) => {
            println!("{heading}:");
            for (mark, count) in distribution {
                println!("  Mark: {mark}, Count: {count}");
            }
        }
    }
}
