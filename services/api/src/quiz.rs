use clap::Args;
use longevity::assessment::router::SUBMIT_PATH;
use longevity::assessment::{
    breakdown, AnswerType, AnswerValue, Answers, Question, QuizWizard, ResultsView, Submission,
    WizardStep,
};
use longevity::config::AppConfig;
use longevity::error::AppError;
use serde_json::{json, Value};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Base URL of a running backend (e.g. http://127.0.0.1:3000) to email the report
    #[arg(long)]
    pub(crate) notify_url: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a saved submission or a bare answer map
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// First name to greet when the input is a bare answer map
    #[arg(long, default_value = "there")]
    pub(crate) name: String,
    /// Print the results view and score breakdown as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let submission = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout().lock();
        let Some(submission) = drive_wizard(&mut input, &mut output)? else {
            writeln!(output, "\nAssessment cancelled.")?;
            return Ok(());
        };

        let view = ResultsView::build(
            &submission.first_name,
            &submission.answers,
            &config.recommendations,
        );
        render_results(&mut output, &view)?;
        submission
    };

    if let Some(url) = args.notify_url {
        let (success, payload) = notify_backend(&url, &submission).await?;
        if success {
            println!(
                "\nReport emailed to {} (id {})",
                submission.email,
                payload["emailId"].as_str().unwrap_or("unknown")
            );
        } else {
            println!(
                "\nBackend rejected the submission: {}",
                payload["error"].as_str().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { input, name, json } = args;
    let config = AppConfig::load()?;

    let raw = std::fs::read_to_string(&input)?;
    let (first_name, answers) = parse_saved_input(&raw, name)?;

    let view = ResultsView::build(&first_name, &answers, &config.recommendations);
    let breakdown = breakdown(&answers);

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if json {
        let payload = json!({ "results": view, "breakdown": breakdown });
        writeln!(output, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    render_results(&mut output, &view)?;
    writeln!(output, "\nScore breakdown (base {})", breakdown.base)?;
    for component in &breakdown.components {
        writeln!(
            output,
            "  {:+4}  {:?} ({})",
            component.delta, component.factor, component.notes
        )?;
    }
    writeln!(
        output,
        "  total {} -> {}/100",
        breakdown.raw_total, breakdown.score
    )?;
    Ok(())
}

/// Accepts a full submission or a bare answer map.
fn parse_saved_input(raw: &str, fallback_name: String) -> Result<(String, Answers), AppError> {
    if let Ok(submission) = serde_json::from_str::<Submission>(raw) {
        return Ok((submission.first_name, submission.answers));
    }
    let answers: Answers = serde_json::from_str(raw)?;
    Ok((fallback_name, answers))
}

async fn notify_backend(base_url: &str, submission: &Submission) -> Result<(bool, Value), AppError> {
    let endpoint = format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_PATH);
    let response = reqwest::Client::new()
        .post(endpoint)
        .json(submission)
        .send()
        .await?;
    let success = response.status().is_success();
    let payload = response.json::<Value>().await?;
    Ok((success, payload))
}

/// Runs the wizard over line-oriented input. Returns `None` when input ends
/// before the email step completes.
pub(crate) fn drive_wizard<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<Submission>, AppError> {
    let mut wizard = QuizWizard::new();

    loop {
        match wizard.step() {
            WizardStep::Landing => {
                writeln!(output, "Discover your longevity score")?;
                writeln!(
                    output,
                    "A few questions about sleep, diet, exercise, stress, and health."
                )?;
                wizard.start()?;
            }
            WizardStep::CollectingName => {
                let Some(first_name) = prompt(input, output, "\nFirst name: ")? else {
                    return Ok(None);
                };
                let Some(last_name) = prompt(input, output, "Last name (optional): ")? else {
                    return Ok(None);
                };
                wizard.set_first_name(&first_name);
                wizard.set_last_name(&last_name);
                if let Err(err) = wizard.submit_name() {
                    writeln!(output, "{err}")?;
                }
            }
            WizardStep::AnsweringQuestion(_) => {
                let Some(question) = wizard.current_question() else {
                    return Ok(None);
                };
                let (current, total) = wizard.progress();
                writeln!(
                    output,
                    "\n[{current}/{total}] {}: {}",
                    question.category.label(),
                    question.prompt
                )?;
                print_choices(output, question)?;

                let Some(line) = prompt(input, output, "> ")? else {
                    return Ok(None);
                };
                if line.eq_ignore_ascii_case("b") {
                    wizard.previous()?;
                    continue;
                }
                match parse_answer(question, &line) {
                    Ok(value) => {
                        wizard.answer(value)?;
                        wizard.next()?;
                    }
                    Err(message) => writeln!(output, "{message}")?,
                }
            }
            WizardStep::CollectingEmail => {
                let Some(email) = prompt(
                    input,
                    output,
                    "\nEmail for your personalized report ('b' to go back): ",
                )?
                else {
                    return Ok(None);
                };
                if email.eq_ignore_ascii_case("b") {
                    wizard.previous()?;
                    continue;
                }
                wizard.set_email(&email);
                match wizard.submit_email() {
                    Ok(submission) => return Ok(Some(submission)),
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            WizardStep::Complete => return Ok(None),
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_choices<W: Write>(output: &mut W, question: &Question) -> Result<(), AppError> {
    match question.answer_type {
        AnswerType::Scale { min, max } => {
            writeln!(output, "  Enter a number from {min} (low) to {max} (high)")?;
        }
        AnswerType::MultiSelect => {
            for (index, option) in question.choices().iter().enumerate() {
                writeln!(output, "  {}. {option}", index + 1)?;
            }
            writeln!(output, "  Comma-separated numbers; leave blank for none")?;
        }
        AnswerType::SingleChoice | AnswerType::YesNo => {
            for (index, option) in question.choices().iter().enumerate() {
                writeln!(output, "  {}. {option}", index + 1)?;
            }
        }
    }
    Ok(())
}

fn parse_answer(question: &Question, raw: &str) -> Result<AnswerValue, String> {
    let choices = question.choices();
    let pick = |token: &str| -> Result<&'static str, String> {
        token
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| choices.get(index).copied())
            .ok_or_else(|| format!("Enter a number between 1 and {}", choices.len()))
    };

    match question.answer_type {
        AnswerType::Scale { min, max } => raw
            .parse::<u8>()
            .ok()
            .filter(|value| (min..=max).contains(value))
            .map(AnswerValue::from)
            .ok_or_else(|| format!("Enter a number between {min} and {max}")),
        AnswerType::MultiSelect if raw.is_empty() => Ok(AnswerValue::from(Vec::<String>::new())),
        AnswerType::MultiSelect => {
            let mut selected: Vec<&str> = Vec::new();
            for token in raw.split(',') {
                let option = pick(token)?;
                if !selected.contains(&option) {
                    selected.push(option);
                }
            }
            Ok(AnswerValue::from(selected))
        }
        AnswerType::SingleChoice | AnswerType::YesNo => pick(raw).map(AnswerValue::from),
    }
}

pub(crate) fn render_results<W: Write>(output: &mut W, view: &ResultsView) -> Result<(), AppError> {
    writeln!(output, "\nCongratulations, {}!", view.first_name)?;
    writeln!(
        output,
        "Your Longevity Score: {}/100 ({})",
        view.longevity_score, view.level_label
    )?;

    if !view.top_picks.is_empty() {
        writeln!(output, "\nTop recommendations")?;
        for pick in &view.top_picks {
            writeln!(output, "  {}: {}", pick.label, pick.recommendation.title)?;
            if let Some(link) = pick.recommendation.link {
                writeln!(output, "     {link}")?;
            }
        }
    }

    if !view.strengths.is_empty() {
        writeln!(output, "\nStrengths")?;
        for strength in &view.strengths {
            writeln!(output, "  + {strength}")?;
        }
    }
    if !view.opportunities.is_empty() {
        writeln!(output, "\nOptimization opportunities")?;
        for opportunity in &view.opportunities {
            writeln!(output, "  - {opportunity}")?;
        }
    }

    writeln!(output, "\nComplete optimization plan")?;
    for recommendation in &view.recommendations {
        writeln!(
            output,
            "  [{}] {}",
            recommendation.category.label(),
            recommendation.title
        )?;
        writeln!(output, "      {}", recommendation.description)?;
    }

    for quick_start in &view.quick_starts {
        writeln!(output, "\n{}: {}", quick_start.label, quick_start.link)?;
    }
    Ok(())
}
