//! The simulated tutor: canned lesson explanations plus keyword-matched
//! replies to free-text questions. No comprehension happens here; replies are
//! fixed strings chosen by substring checks.

use chrono::{DateTime, Utc};
use lubab_utils::{ChatMessage, ChatRole, Lesson};

/// How much lesson content a "what is" reply quotes.
const SNIPPET_CHARS: usize = 200;

/// Question categories, checked in declaration order. The first category
/// whose token list matches wins; there is no multi-intent handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Intent {
    WhatIs,
    HowWhy,
    Example,
}

/// The ordered dispatch table. Kept as data so the precedence rules stay
/// auditable: "what" beats "how/why" beats "example".
const INTENTS: &[(Intent, &[&str])] = &[
    (Intent::WhatIs, &["ماذا", "ما هو", "ما هي"]),
    (Intent::HowWhy, &["كيف", "لماذا"]),
    (Intent::Example, &["مثال", "مثلاً"]),
];

fn classify(question: &str) -> Option<Intent> {
    let question = question.to_lowercase();
    INTENTS
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|t| question.contains(t)))
        .map(|(intent, _)| *intent)
}

/// The opening explanation shown when a lesson's chat is opened: a canned
/// text keyed by lesson id, or a generic template built from the lesson's
/// title and description.
pub fn generate_explanation(lesson: &Lesson) -> String {
    canned_explanation(&lesson.id)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "مرحباً! اليوم سنتعلم {}. \n\n{}\n\nدعني أشرح لك هذا الدرس بطريقة بسيطة وممتعة. هل أنت مستعد للبدء؟",
                lesson.title, lesson.description
            )
        })
}

/// Replies to a free-text question with one of four templates picked by the
/// dispatch table. Always returns some string; there is no failure mode.
pub fn answer_question(question: &str, lesson: &Lesson) -> String {
    match classify(question) {
        Some(Intent::WhatIs) => {
            let snippet: String = lesson.content.chars().take(SNIPPET_CHARS).collect();
            format!(
                "سؤال ممتاز! دعني أشرح لك:\n\n{snippet}...\n\nهل تريد المزيد من التفاصيل؟ يمكنك أن تسألني عن أي جزء معين!"
            )
        }
        Some(Intent::HowWhy) => "سؤال رائع! هذا يساعدك على الفهم العميق.\n\n\
            دعني أشرح لك بطريقة عملية:\n\
            - الخطوة الأولى: ...\n\
            - الخطوة الثانية: ...\n\
            - الخطوة الثالثة: ...\n\n\
            هل فهمت؟ يمكنك أن تسألني عن أي خطوة بالتفصيل!"
            .to_string(),
        Some(Intent::Example) => "بالطبع! إليك مثال واضح:\n\n\
            مثال 1: ...\n\
            مثال 2: ...\n\
            مثال 3: ...\n\n\
            هل تريد أمثلة أكثر؟"
            .to_string(),
        None => "سؤال جيد! دعني أساعدك.\n\n\
            بناءً على ما تعلمناه في هذا الدرس، الإجابة هي...\n\n\
            هل تريد أن أشرح لك بطريقة أخرى أو لديك سؤال آخر؟"
            .to_string(),
    }
}

/// Cosmetic typing delay before a reply is shown, 1–2 seconds.
pub fn reply_delay_ms() -> u32 {
    1000 + (js_sys::Math::random() * 1000.0) as u32
}

pub fn ai_message(content: String, lesson_id: Option<String>, now: DateTime<Utc>) -> ChatMessage {
    ChatMessage {
        id: format!("msg-{}", now.timestamp_millis()),
        role: ChatRole::Ai,
        content,
        timestamp: now,
        lesson_id,
    }
}

pub fn user_message(content: String, lesson_id: Option<String>, now: DateTime<Utc>) -> ChatMessage {
    ChatMessage {
        id: format!("msg-user-{}", now.timestamp_millis()),
        role: ChatRole::User,
        content,
        timestamp: now,
        lesson_id,
    }
}

fn canned_explanation(lesson_id: &str) -> Option<&'static str> {
    let text = match lesson_id {
        "math-lesson-1" => {
            "مرحباً! اليوم سنتعلم الجمع والطرح. هذه العمليات مهمة جداً في حياتنا اليومية.\n\n\
            دعني أشرح لك بطريقة بسيطة:\n\
            - الجمع: عندما نجمع عددين، نضيفهما معاً\n\
            - الطرح: عندما نطرح، نأخذ عدداً من عدد آخر\n\n\
            مثال بسيط: إذا كان لديك 5 تفاحات وأعطيتك 3 أخرى، كم لديك؟ نعم، 8 تفاحات! هذا هو الجمع.\n\n\
            هل تريد أن أشرح لك مثالاً آخر؟"
        }
        "math-lesson-2" => {
            "أهلاً بك! اليوم سنتعلم الضرب. الضرب أسهل مما تظن!\n\n\
            الضرب هو تكرار الجمع. مثلاً: 3 × 4 يعني أننا نجمع 3 أربع مرات.\n\n\
            دعني أعطيك مثالاً: إذا كان لديك 4 صناديق وكل صندوق فيه 5 أقلام، كم قلم لديك؟\n\
            نضرب 4 × 5 = 20 قلم\n\n\
            هل فهمت؟ يمكنك أن تسألني عن أي شيء!"
        }
        "math-lesson-3" => {
            "مرحباً! سنتعلم اليوم القسمة. القسمة هي عكس الضرب.\n\n\
            القسمة تعني: كم مرة يمكننا تقسيم عدد على عدد آخر؟\n\n\
            مثال: إذا كان لديك 20 قطعة حلوى ووزعتها على 4 أصدقاء بالتساوي، كم قطعة لكل صديق؟\n\
            نقسم 20 ÷ 4 = 5 قطع لكل صديق\n\n\
            هل تريد أمثلة أخرى؟"
        }
        "science-lesson-1" => {
            "أهلاً! اليوم سنتعرف على أجزاء النبات. النباتات كائنات حية رائعة!\n\n\
            كل جزء في النبات له وظيفة مهمة:\n\
            - الجذور: تمتص الماء من التربة\n\
            - الساق: يحمل الأوراق\n\
            - الأوراق: تصنع الغذاء\n\
            - الزهرة: تساعد في التكاثر\n\n\
            تخيل النبات كإنسان: الجذور مثل الفم (تمتص)، الساق مثل الجسم (يحمل)، الأوراق مثل اليدين (تعمل)!\n\n\
            هل تريد معرفة المزيد عن أي جزء معين؟"
        }
        "science-lesson-2" => {
            "مرحباً! سنتعلم اليوم دورة الماء. إنها دورة مستمرة لا تنتهي!\n\n\
            تخيل أنك قطرة ماء:\n\
            1. تبدأ في البحر\n\
            2. تتحول إلى بخار بفعل الشمس (التبخر)\n\
            3. ترتفع إلى السماء وتصبح سحابة (التكثف)\n\
            4. تسقط كقطرات مطر (الهطول)\n\
            5. تعود إلى البحر (الجريان)\n\
            6. تبدأ من جديد!\n\n\
            هذه الدورة تحدث كل يوم في الطبيعة. هل تريد أن أشرح أي مرحلة بالتفصيل؟"
        }
        "science-lesson-3" => {
            "أهلاً! اليوم سنتعرف على الجهاز الهضمي. إنه مثل مصنع داخل جسمك!\n\n\
            الطعام يسير في رحلة:\n\
            1. الفم: حيث نمضغ الطعام\n\
            2. المريء: أنبوب ينقل الطعام\n\
            3. المعدة: تهضم الطعام\n\
            4. الأمعاء الدقيقة: تمتص الغذاء\n\
            5. الأمعاء الغليظة: تتخلص من الفضلات\n\n\
            تخيل أن الطعام رحلة في قطار! كل محطة لها وظيفة مهمة.\n\n\
            هل تريد معرفة المزيد عن أي جزء؟"
        }
        "arabic-lesson-1" => {
            "مرحباً! اليوم سنتعلم أنواع الجمل في اللغة العربية.\n\n\
            هناك نوعان رئيسيان:\n\
            1. الجملة الاسمية: تبدأ باسم (مثل: الشمس مشرقة)\n\
            2. الجملة الفعلية: تبدأ بفعل (مثل: يلعب الطفل)\n\n\
            تخيل الجملة كبيت:\n\
            - الجملة الاسمية: الباب اسم (المبتدأ) والغرفة خبر\n\
            - الجملة الفعلية: الباب فعل والغرفة فاعل\n\n\
            هل تريد أمثلة أكثر؟"
        }
        "arabic-lesson-2" => {
            "أهلاً! سنتعلم اليوم المفعول به. إنه مهم جداً في اللغة العربية!\n\n\
            المفعول به هو: الاسم الذي يقع عليه فعل الفاعل.\n\n\
            مثال: \"قرأ الطالب الكتاب\"\n\
            - قرأ: الفعل\n\
            - الطالب: الفاعل\n\
            - الكتاب: المفعول به (ما وقع عليه الفعل)\n\n\
            تخيل أن الفاعل يرمي كرة، والكرة هي المفعول به!\n\n\
            هل تريد أمثلة أخرى؟"
        }
        "arabic-lesson-3" => {
            "مرحباً! اليوم سنتعلم الضمائر. الضمائر تجعل كلامنا أقصر وأسهل!\n\n\
            الضمائر مثل الأسماء المختصرة:\n\
            - أنا: بدلاً من قول اسمك كل مرة\n\
            - أنت: بدلاً من قول اسم الشخص\n\
            - هو/هي: بدلاً من قول اسم الغائب\n\n\
            مثال: بدلاً من قول \"أحمد طالب مجتهد\" يمكنك قول \"أنا طالب مجتهد\"\n\n\
            هل تريد معرفة المزيد عن الضمائر؟"
        }
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lubab_utils::Difficulty;

    fn lesson(id: &str, content: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: "الكسور".to_string(),
            description: "مقدمة في الكسور".to_string(),
            content: content.to_string(),
            subject_id: "math".to_string(),
            order: 1,
            difficulty: Difficulty::Easy,
            quiz_id: "quiz-x".to_string(),
        }
    }

    #[test]
    fn known_lesson_gets_its_canned_explanation() {
        let lesson = lesson("math-lesson-1", "");
        let text = generate_explanation(&lesson);
        assert!(text.contains("الجمع والطرح"));
    }

    #[test]
    fn unknown_lesson_falls_back_to_the_template() {
        let lesson = lesson("math-lesson-99", "");
        let text = generate_explanation(&lesson);
        assert!(text.contains("الكسور"));
        assert!(text.contains("مقدمة في الكسور"));
    }

    #[test]
    fn what_questions_quote_the_lesson_content() {
        let long_content = "أ".repeat(300);
        let lesson = lesson("x", &long_content);
        let reply = answer_question("ما هو الكسر؟", &lesson);
        assert!(reply.contains(&"أ".repeat(SNIPPET_CHARS)));
        assert!(!reply.contains(&"أ".repeat(SNIPPET_CHARS + 1)));
    }

    #[test]
    fn how_and_why_questions_get_the_step_outline() {
        let lesson = lesson("x", "محتوى");
        for q in ["كيف أجمع عددين؟", "لماذا نتعلم القسمة؟"] {
            let reply = answer_question(q, &lesson);
            assert!(reply.contains("الخطوة الأولى"));
        }
    }

    #[test]
    fn example_questions_get_the_example_template() {
        let lesson = lesson("x", "محتوى");
        let reply = answer_question("أعطني مثالاً على ذلك", &lesson);
        assert!(reply.contains("مثال 1"));
    }

    #[test]
    fn unmatched_questions_get_the_generic_fallback() {
        let lesson = lesson("x", "محتوى");
        let reply = answer_question("أريد المساعدة", &lesson);
        assert!(reply.contains("سؤال جيد"));
    }

    #[test]
    fn first_matching_category_wins() {
        let lesson = lesson("x", "محتوى الدرس");
        // contains both a how/why token and an example token; how/why is
        // checked first
        let reply = answer_question("كيف أحل هذا؟ أعطني مثالاً", &lesson);
        assert!(reply.contains("الخطوة الأولى"));
        assert!(!reply.contains("مثال 1"));

        // a what token outranks everything
        let reply = answer_question("ما هي القسمة ولماذا نستخدمها؟", &lesson);
        assert!(reply.contains("دعني أشرح لك:"));
    }

    #[test]
    fn messages_carry_role_and_lesson() {
        let now = Utc::now();
        let msg = ai_message("مرحباً".to_string(), Some("math-lesson-1".to_string()), now);
        assert_eq!(msg.role, ChatRole::Ai);
        assert_eq!(msg.lesson_id.as_deref(), Some("math-lesson-1"));

        let msg = user_message("سؤالي".to_string(), None, now);
        assert_eq!(msg.role, ChatRole::User);
        assert!(msg.id.starts_with("msg-user-"));
    }
}
