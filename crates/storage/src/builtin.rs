use drill_core::model::{Catalog, Category, CategoryId, SentencePair};

type CategorySeed = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const SEED: &[CategorySeed] = &[
    (
        "greetings",
        "Greetings",
        &[
            ("처음 뵙겠습니다.", "Nice to meet you."),
            ("만나서 반갑습니다.", "It's a pleasure to meet you."),
            ("오랜만이에요.", "It's been a while."),
            ("잘 지내셨어요?", "How have you been?"),
        ],
    ),
    (
        "meetings",
        "Meetings",
        &[
            ("회의를 시작하겠습니다.", "Let's get the meeting started."),
            ("안건을 검토해 봅시다.", "Let's go over the agenda."),
            ("다른 의견 있으신가요?", "Does anyone have a different opinion?"),
            ("이 부분은 다음 회의에서 논의합시다.", "Let's discuss this at the next meeting."),
            ("회의를 마치겠습니다.", "Let's wrap up the meeting."),
        ],
    ),
    (
        "email",
        "Email",
        &[
            ("첨부 파일을 확인해 주세요.", "Please find the attached file."),
            ("빠른 답변 부탁드립니다.", "I look forward to your prompt reply."),
            ("문의해 주셔서 감사합니다.", "Thank you for your inquiry."),
            ("추가 질문이 있으시면 알려주세요.", "Please let me know if you have any further questions."),
        ],
    ),
    (
        "phone",
        "Phone Calls",
        &[
            ("잠시만 기다려 주세요.", "Please hold on a moment."),
            ("메시지를 남기시겠어요?", "Would you like to leave a message?"),
            ("다시 전화드리겠습니다.", "I'll call you back."),
        ],
    ),
];

/// Sample Korean to English business phrases used when no catalog file is configured.
///
/// # Panics
///
/// Panics if the embedded seed data stops being a valid catalog.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    let categories = SEED
        .iter()
        .map(|(id, name, pairs)| {
            Category::new(
                CategoryId::new(*id),
                *name,
                pairs
                    .iter()
                    .map(|(source, target)| SentencePair::new(*source, *target))
                    .collect(),
            )
        })
        .collect();
    Catalog::new(categories).expect("built-in catalog should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_sentences_in_every_category() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.categories().len(), SEED.len());
        assert!(catalog.categories().iter().all(|c| !c.is_empty()));
    }
}
