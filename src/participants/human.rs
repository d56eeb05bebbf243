use super::*;
use crate::Points;
use crate::flow::Submission;
use crate::flow::Vars;
use crate::session::Appropriateness;
use crate::session::Fairness;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// A person playing from the terminal.
pub struct Human;

impl Human {
    fn prompt(round: usize, vars: &Vars) -> anyhow::Result<Submission> {
        match vars {
            Vars::Send(v) => {
                if let Some(recap) = v.previous {
                    println!(
                        "{}",
                        format!(
                            "last round as {}: sent {} / returned {} of {}",
                            recap.prev_role,
                            recap.prev_sent.unwrap_or_default(),
                            recap.prev_sent_back.unwrap_or_default(),
                            recap.prev_sent_back_available.unwrap_or_default(),
                        )
                        .dimmed()
                    );
                }
                let labels = v.choices.iter().map(|c| c.to_string()).collect::<Vec<_>>();
                let i = Select::new()
                    .with_prompt(format!(
                        "\nROUND {} YOU HOLD {} POINTS. SEND",
                        round, v.endowment
                    ))
                    .items(&labels)
                    .default(0)
                    .interact()?;
                v.choices
                    .get(i)
                    .copied()
                    .map(Submission::Send)
                    .ok_or_else(|| anyhow::anyhow!("selection out of range"))
            }
            Vars::SendBack(v) => {
                let max = v.sent_back_max;
                let amount = Input::<Points>::new()
                    .with_prompt(format!(
                        "\nROUND {} YOU RECEIVED {} ({}x). SEND BACK 0..={}",
                        round, v.tripled_amount, v.multiplication_factor, max
                    ))
                    .validate_with(move |x: &Points| -> Result<(), String> {
                        match *x <= max {
                            true => Ok(()),
                            false => Err(format!("at most {}", max)),
                        }
                    })
                    .interact_text()?;
                Ok(Submission::SendBack(amount))
            }
            Vars::Feedback(_) => {
                let fairness = Select::new()
                    .with_prompt("\nHOW FAIR WAS YOUR PARTNER")
                    .items(&Fairness::ALL.map(|c| c.label()))
                    .default(2)
                    .interact()?;
                let appropriate = Select::new()
                    .with_prompt("\nWAS THE AMOUNT APPROPRIATE")
                    .items(&Appropriateness::ALL.map(|c| c.label()))
                    .default(2)
                    .interact()?;
                Ok(Submission::Feedback(
                    Fairness::ALL[fairness.min(Fairness::ALL.len() - 1)],
                    Appropriateness::ALL[appropriate.min(Appropriateness::ALL.len() - 1)],
                ))
            }
            Vars::Results(v) => {
                println!(
                    "{} sent {} returned {} payoff {}",
                    v.role,
                    v.sent_amount.unwrap_or_default(),
                    v.sent_back_amount.unwrap_or_default(),
                    v.payoff.unwrap_or_default().to_string().green(),
                );
                if let (Some(fairness), Some(appropriate)) =
                    (v.fairness_feedback, v.amount_appropriate_feedback)
                {
                    println!("partner rated you: {} / {}", fairness, appropriate);
                }
                Select::new()
                    .with_prompt("\nCONTINUE")
                    .items(&["Weiter"])
                    .default(0)
                    .interact()?;
                Ok(Submission::Next)
            }
        }
    }
}

#[async_trait::async_trait]
impl Participant for Human {
    async fn decide(&mut self, round: usize, vars: &Vars) -> Submission {
        let owned = vars.clone();
        tokio::task::spawn_blocking(move || Self::prompt(round, &owned))
            .await
            .map_err(anyhow::Error::from)
            .and_then(|answer| answer)
            .inspect_err(|e| log::error!("terminal input failed: {}", e))
            .unwrap_or_else(|_| Submission::passive(vars))
    }
    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Waiting(round, page) => {
                println!("{}", format!("round {} {}: waiting...", round, page).dimmed())
            }
            Event::Rejected(reason) => println!("{}", reason.red()),
            Event::Finished(payment) => println!("{}", payment.to_string().green()),
        }
    }
}
