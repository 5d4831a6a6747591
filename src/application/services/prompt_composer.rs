use crate::application::ports::ContentBlock;
use crate::domain::{AudioAttachment, DisruptorCategory, QuizAnswers, Transcripts};

const FOOD_RECORDING_LABEL: &str =
    "[Above is the FOOD RECORDING - what they eat on a typical day]";
const ROUTINE_RECORDING_LABEL: &str =
    "[Above is the ROUTINE RECORDING - their typical day from morning to night]";

const ANALYSIS_GUIDELINES: [(&str, DisruptorCategory); 7] = [
    (
        "Poor sleep schedule, late nights, irregular sleep, night shifts",
        DisruptorCategory::Circadian,
    ),
    (
        "High stress, anxiety, demanding job",
        DisruptorCategory::ChronicStressResponse,
    ),
    (
        "Poor diet, processed food, fast food",
        DisruptorCategory::NutritionalDeficiency,
    ),
    (
        "Sedentary lifestyle, desk job, no exercise",
        DisruptorCategory::SedentaryMetabolism,
    ),
    (
        "High screen time, phone addiction",
        DisruptorCategory::DigitalOverstimulation,
    ),
    (
        "Digestive problems, bloating, gut issues",
        DisruptorCategory::GutDysbiosis,
    ),
    (
        "Mentions plastic containers, processed foods",
        DisruptorCategory::Microplastic,
    ),
];

/// Audio material to place after the instruction text.
#[derive(Debug, Clone, Copy)]
pub enum AudioContent<'a> {
    None,
    Inline {
        food: Option<&'a AudioAttachment>,
        routine: Option<&'a AudioAttachment>,
    },
    Transcripts(&'a Transcripts),
}

/// Builds the user message for the reasoning service.
///
/// The first block is always the instruction text. Inline audio adds an audio
/// block followed by a label block per recording; transcripts are appended to
/// the instruction text itself.
pub fn compose_prompt(quiz: &QuizAnswers, audio: AudioContent<'_>) -> Vec<ContentBlock> {
    let mut instruction = instruction_text(quiz);

    match audio {
        AudioContent::None => vec![ContentBlock::Text(instruction)],
        AudioContent::Transcripts(transcripts) => {
            append_transcripts(&mut instruction, transcripts);
            vec![ContentBlock::Text(instruction)]
        }
        AudioContent::Inline { food, routine } => {
            let mut blocks = vec![ContentBlock::Text(instruction)];
            for (attachment, label) in [
                (food, FOOD_RECORDING_LABEL),
                (routine, ROUTINE_RECORDING_LABEL),
            ] {
                if let Some(attachment) = attachment {
                    blocks.push(ContentBlock::InputAudio {
                        data: attachment.payload.clone(),
                        format: attachment.format().to_string(),
                    });
                    blocks.push(ContentBlock::text(label));
                }
            }
            blocks
        }
    }
}

fn instruction_text(quiz: &QuizAnswers) -> String {
    let categories = DisruptorCategory::ALL
        .iter()
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");

    let guidelines = ANALYSIS_GUIDELINES
        .iter()
        .map(|(cues, category)| format!("- {} → {}", cues, category))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are analyzing a testosterone assessment to determine the user's PRIMARY testosterone disruptor.

Based on the quiz answers and voice recordings, classify this person into EXACTLY ONE of these {count} categories:
{categories}

QUIZ ANSWERS:
- Energy level (1-10): {energy}
- Sleep hours per night: {sleep_hours}
- Usual bedtime: {bedtime}
- Works night shifts: {night_shifts}
- Stress level (1-10): {stress}
- Time spent indoors daily: {indoor_time}
- Digestive issues: {digestive}
- Body composition: {body_comp}

ANALYSIS GUIDELINES:
{guidelines}

DECISION POLICY:
- When voice recordings or transcripts are present, prioritize what the person actually says over the quiz answers.
- Do not default to circadian unless there is clear evidence of a sleep or schedule problem.
- Do not choose microplastic unless plastic exposure is actually mentioned.

Respond with ONLY the disruptor category name, nothing else. Just one word from the list above.",
        count = DisruptorCategory::ALL.len(),
        categories = categories,
        energy = quiz.energy,
        sleep_hours = quiz.sleep_hours,
        bedtime = quiz.bedtime,
        night_shifts = quiz.night_shifts,
        stress = quiz.stress,
        indoor_time = quiz.indoor_time,
        digestive = quiz.digestive,
        body_comp = quiz.body_comp,
        guidelines = guidelines,
    )
}

fn append_transcripts(instruction: &mut String, transcripts: &Transcripts) {
    let sections = [
        (
            transcripts.food.as_deref(),
            "FOOD RECORDING TRANSCRIPT (what they eat on a typical day)",
        ),
        (
            transcripts.routine.as_deref(),
            "ROUTINE RECORDING TRANSCRIPT (their typical day from morning to night)",
        ),
    ];

    for (transcript, heading) in sections {
        if let Some(text) = transcript.filter(|t| !t.trim().is_empty()) {
            instruction.push_str(&format!("\n\n{}:\n\"{}\"", heading, text.trim()));
        }
    }
}
