//! The static curriculum catalog: grades, subjects with their lessons,
//! quizzes, and the demo accounts. Read-only at runtime; consumers get it
//! through the [`Catalog`] trait so a real backing store can be swapped in
//! later without touching them.

use lubab_utils::{Difficulty, Grade, Lesson, Question, Quiz, Subject, User, UserRole};

pub trait Catalog {
    fn grades(&self) -> &[Grade];
    fn all_subjects(&self) -> &[Subject];
    fn quizzes(&self) -> &[Quiz];
    fn demo_users(&self) -> &[User];

    /// The subjects actually offered on the dashboard: those that belong to
    /// an available grade and have at least one lesson.
    fn subjects(&self) -> Vec<&Subject> {
        let available: Vec<&str> = self
            .grades()
            .iter()
            .filter(|g| g.available)
            .map(|g| g.id.as_str())
            .collect();
        self.all_subjects()
            .iter()
            .filter(|s| available.contains(&s.grade_id.as_str()) && !s.lessons.is_empty())
            .collect()
    }

    fn grade(&self, id: &str) -> Option<&Grade> {
        self.grades().iter().find(|g| g.id == id)
    }

    fn subject(&self, id: &str) -> Option<&Subject> {
        self.all_subjects().iter().find(|s| s.id == id)
    }

    fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.all_subjects()
            .iter()
            .flat_map(|s| s.lessons.iter())
            .find(|l| l.id == id)
    }

    fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes().iter().find(|q| q.id == id)
    }

    fn quiz_for_lesson(&self, lesson_id: &str) -> Option<&Quiz> {
        self.quizzes().iter().find(|q| q.lesson_id == lesson_id)
    }

    fn subject_of_lesson(&self, lesson_id: &str) -> Option<&Subject> {
        self.all_subjects()
            .iter()
            .find(|s| s.lessons.iter().any(|l| l.id == lesson_id))
    }
}

/// The single [`Catalog`] implementation, backed by data embedded in the
/// binary.
pub struct EmbeddedCatalog {
    grades: Vec<Grade>,
    subjects: Vec<Subject>,
    quizzes: Vec<Quiz>,
    users: Vec<User>,
}

impl Catalog for EmbeddedCatalog {
    fn grades(&self) -> &[Grade] {
        &self.grades
    }

    fn all_subjects(&self) -> &[Subject] {
        &self.subjects
    }

    fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    fn demo_users(&self) -> &[User] {
        &self.users
    }
}

impl Default for EmbeddedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self {
            grades: grades(),
            subjects: subjects(),
            quizzes: quizzes(),
            users: demo_users(),
        }
    }
}

fn grades() -> Vec<Grade> {
    let names = [
        "الصف الأول",
        "الصف الثاني",
        "الصف الثالث",
        "الصف الرابع",
        "الصف الخامس",
        "الصف السادس",
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let level = i as u32 + 1;
            Grade {
                id: format!("grade-{level}"),
                name: name.to_string(),
                level,
                // Only grade 5 content exists in the demo curriculum.
                available: level == 5,
            }
        })
        .collect()
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "student-1".to_string(),
            email: "student@lubab.com".to_string(),
            password: "123456".to_string(),
            name: "أحمد".to_string(),
            role: UserRole::Student,
            student_id: None,
        },
        User {
            id: "parent-1".to_string(),
            email: "parent@lubab.com".to_string(),
            password: "123456".to_string(),
            name: "ولي الأمر".to_string(),
            role: UserRole::Parent,
            student_id: Some("student-1".to_string()),
        },
    ]
}

struct LessonSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    content: &'static str,
    order: u32,
    difficulty: Difficulty,
    quiz_id: &'static str,
}

fn build_subject(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    lessons: &[LessonSpec],
) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        grade_id: "grade-5".to_string(),
        lessons: lessons
            .iter()
            .map(|spec| Lesson {
                id: spec.id.to_string(),
                title: spec.title.to_string(),
                description: spec.description.to_string(),
                content: spec.content.to_string(),
                subject_id: id.to_string(),
                order: spec.order,
                difficulty: spec.difficulty,
                quiz_id: spec.quiz_id.to_string(),
            })
            .collect(),
    }
}

fn subjects() -> Vec<Subject> {
    vec![
        build_subject(
            "math",
            "الرياضيات",
            "🔢",
            "تعلم الجمع والطرح والضرب والقسمة",
            &[
                LessonSpec {
                    id: "math-lesson-1",
                    title: "الجمع والطرح",
                    description: "تعلم أساسيات الجمع والطرح مع أمثلة عملية",
                    content: "الجمع هو ضم عددين أو أكثر معاً للحصول على المجموع، \
                        والطرح هو أخذ عدد من عدد آخر لمعرفة الباقي. نستخدم هاتين \
                        العمليتين كل يوم: عند شراء الحلوى، وعند عدّ الأقلام، وعند \
                        توزيع الألعاب على الأصدقاء. عند الجمع نبدأ بالعدد الأكبر \
                        ونضيف إليه العدد الأصغر، وعند الطرح نتأكد أن المطروح أصغر \
                        من المطروح منه. تذكر دائماً أن ترتيب الأعداد في الجمع لا \
                        يغير الناتج، أما في الطرح فالترتيب مهم جداً.",
                    order: 1,
                    difficulty: Difficulty::Easy,
                    quiz_id: "math-quiz-1",
                },
                LessonSpec {
                    id: "math-lesson-2",
                    title: "الضرب",
                    description: "الضرب هو جمع متكرر، تعلمه بطريقة سهلة",
                    content: "الضرب هو عملية جمع متكرر للعدد نفسه. عندما نقول 3 في \
                        4 فنحن نجمع العدد 3 أربع مرات: 3 زائد 3 زائد 3 زائد 3 \
                        يساوي 12. جدول الضرب يساعدنا على حساب النواتج بسرعة دون \
                        الحاجة إلى الجمع الطويل. من خصائص الضرب أن ترتيب العددين \
                        لا يغير الناتج، وأن ضرب أي عدد في واحد يعطي العدد نفسه، \
                        وضرب أي عدد في صفر يعطي صفراً دائماً.",
                    order: 2,
                    difficulty: Difficulty::Medium,
                    quiz_id: "math-quiz-2",
                },
                LessonSpec {
                    id: "math-lesson-3",
                    title: "القسمة",
                    description: "القسمة هي عكس الضرب، تعلم كيفية التوزيع بالتساوي",
                    content: "القسمة هي توزيع عدد على مجموعات متساوية، وهي العملية \
                        العكسية للضرب. إذا كان لديك 20 قطعة حلوى وأردت توزيعها على \
                        4 أصدقاء بالتساوي، فإن كل صديق يحصل على 5 قطع لأن 20 على 4 \
                        يساوي 5. يمكننا التحقق من صحة القسمة بالضرب: 5 في 4 يساوي \
                        20. تذكر أن القسمة على صفر غير ممكنة، وأن قسمة العدد على \
                        نفسه تساوي واحداً دائماً.",
                    order: 3,
                    difficulty: Difficulty::Medium,
                    quiz_id: "math-quiz-3",
                },
            ],
        ),
        build_subject(
            "science",
            "العلوم",
            "🔬",
            "اكتشف عالم النباتات والماء وجسم الإنسان",
            &[
                LessonSpec {
                    id: "science-lesson-1",
                    title: "أجزاء النبات",
                    description: "تعرف على أجزاء النبات ووظيفة كل جزء",
                    content: "النبات كائن حي يتكون من أجزاء رئيسية لكل منها وظيفة: \
                        الجذور تثبت النبات في التربة وتمتص الماء والأملاح، والساق \
                        يحمل الأوراق وينقل الماء إليها، والأوراق تصنع الغذاء \
                        باستخدام ضوء الشمس في عملية البناء الضوئي، والزهرة مسؤولة \
                        عن التكاثر وتكوين الثمار والبذور. عندما تسقي نبتة في \
                        المنزل فإن الماء يدخل من الجذور ويصعد عبر الساق حتى يصل \
                        إلى الأوراق.",
                    order: 1,
                    difficulty: Difficulty::Easy,
                    quiz_id: "science-quiz-1",
                },
                LessonSpec {
                    id: "science-lesson-2",
                    title: "دورة الماء",
                    description: "رحلة قطرة الماء من البحر إلى السماء والعودة",
                    content: "دورة الماء هي رحلة مستمرة للماء في الطبيعة. تبدأ \
                        بالتبخر عندما تسخن الشمس ماء البحار فيتحول إلى بخار يرتفع \
                        في الهواء، ثم يحدث التكثف عندما يبرد البخار في الأعلى \
                        ويتحول إلى سحب، ثم الهطول عندما تسقط قطرات الماء كمطر، \
                        وأخيراً الجريان عندما يعود الماء إلى البحار والأنهار \
                        لتبدأ الدورة من جديد. بفضل هذه الدورة لا ينفد الماء من \
                        كوكبنا أبداً.",
                    order: 2,
                    difficulty: Difficulty::Medium,
                    quiz_id: "science-quiz-2",
                },
                LessonSpec {
                    id: "science-lesson-3",
                    title: "الجهاز الهضمي",
                    description: "رحلة الطعام داخل جسم الإنسان",
                    content: "الجهاز الهضمي يحول الطعام إلى غذاء يستفيد منه الجسم. \
                        تبدأ الرحلة في الفم حيث نمضغ الطعام وتخلطه الأسنان \
                        باللعاب، ثم ينزلق عبر المريء إلى المعدة التي تهضمه \
                        بعصاراتها، ثم ينتقل إلى الأمعاء الدقيقة حيث يمتص الجسم \
                        المواد الغذائية، وأخيراً تتخلص الأمعاء الغليظة من \
                        الفضلات. لهذا من المهم مضغ الطعام جيداً وشرب الماء \
                        لمساعدة الجهاز الهضمي على عمله.",
                    order: 3,
                    difficulty: Difficulty::Hard,
                    quiz_id: "science-quiz-3",
                },
            ],
        ),
        build_subject(
            "arabic",
            "اللغة العربية",
            "📖",
            "قواعد اللغة العربية بطريقة مبسطة",
            &[
                LessonSpec {
                    id: "arabic-lesson-1",
                    title: "أنواع الجمل",
                    description: "الفرق بين الجملة الاسمية والجملة الفعلية",
                    content: "الجمل في اللغة العربية نوعان: الجملة الاسمية التي \
                        تبدأ باسم وتتكون من مبتدأ وخبر مثل: الشمس مشرقة، والجملة \
                        الفعلية التي تبدأ بفعل وتتكون من فعل وفاعل مثل: يلعب \
                        الطفل. لمعرفة نوع الجملة انظر إلى أول كلمة فيها: إن كانت \
                        اسماً فالجملة اسمية، وإن كانت فعلاً فالجملة فعلية. كلا \
                        النوعين يؤدي معنى تاماً مفيداً.",
                    order: 1,
                    difficulty: Difficulty::Easy,
                    quiz_id: "arabic-quiz-1",
                },
                LessonSpec {
                    id: "arabic-lesson-2",
                    title: "المفعول به",
                    description: "تعرف على المفعول به وكيفية إعرابه",
                    content: "المفعول به هو الاسم الذي يقع عليه فعل الفاعل، وهو \
                        منصوب دائماً. في جملة: قرأ الطالب الكتاب، الفعل هو قرأ، \
                        والفاعل هو الطالب، والمفعول به هو الكتاب لأنه الشيء الذي \
                        وقعت عليه القراءة. للعثور على المفعول به اسأل: ماذا فعل \
                        الفاعل؟ فالجواب هو المفعول به. لا يوجد مفعول به إلا في \
                        الجملة الفعلية.",
                    order: 2,
                    difficulty: Difficulty::Medium,
                    quiz_id: "arabic-quiz-2",
                },
                LessonSpec {
                    id: "arabic-lesson-3",
                    title: "الضمائر",
                    description: "الضمائر المنفصلة وأنواعها",
                    content: "الضمير كلمة قصيرة تحل محل الاسم لتجنب تكراره. \
                        ضمائر المتكلم: أنا ونحن، وضمائر المخاطب: أنت وأنتِ \
                        وأنتما وأنتم وأنتن، وضمائر الغائب: هو وهي وهما وهم وهن. \
                        بدلاً من قول: أحمد طالب مجتهد، يقول أحمد عن نفسه: أنا \
                        طالب مجتهد. استخدام الضمائر يجعل الكلام أقصر وأجمل \
                        ويمنع التكرار الممل للأسماء.",
                    order: 3,
                    difficulty: Difficulty::Medium,
                    quiz_id: "arabic-quiz-3",
                },
            ],
        ),
        // Planned but has no content yet; filtered out of the dashboard list.
        build_subject(
            "english",
            "اللغة الإنجليزية",
            "🔤",
            "أساسيات اللغة الإنجليزية",
            &[],
        ),
    ]
}

fn question(
    id: &str,
    text: &str,
    options: &[&str],
    correct_answer: usize,
    explanation: &str,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: Some(explanation.to_string()),
    }
}

fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: "math-quiz-1".to_string(),
            lesson_id: "math-lesson-1".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "mq1-1",
                    "ما ناتج 5 + 3؟",
                    &["6", "7", "8", "9"],
                    2,
                    "نجمع 5 و3 فنحصل على 8",
                ),
                question(
                    "mq1-2",
                    "ما ناتج 12 - 4؟",
                    &["6", "7", "8", "9"],
                    2,
                    "نطرح 4 من 12 فيبقى 8",
                ),
                question(
                    "mq1-3",
                    "إذا كان لديك 7 تفاحات وأكلت 2، كم تفاحة بقيت؟",
                    &["4", "5", "6", "7"],
                    1,
                    "7 - 2 = 5",
                ),
                question(
                    "mq1-4",
                    "ما ناتج 9 + 6؟",
                    &["14", "15", "16", "17"],
                    1,
                    "9 + 6 = 15",
                ),
                question(
                    "mq1-5",
                    "أي عملية نستخدم لمعرفة الباقي؟",
                    &["الجمع", "الطرح", "الضرب", "القسمة"],
                    1,
                    "الطرح يخبرنا بالباقي بعد أخذ عدد من عدد آخر",
                ),
            ],
        },
        Quiz {
            id: "math-quiz-2".to_string(),
            lesson_id: "math-lesson-2".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "mq2-1",
                    "ما ناتج 3 × 4؟",
                    &["7", "10", "12", "14"],
                    2,
                    "3 × 4 يعني جمع 3 أربع مرات: 12",
                ),
                question(
                    "mq2-2",
                    "ما ناتج 5 × 6؟",
                    &["25", "30", "35", "40"],
                    1,
                    "5 × 6 = 30",
                ),
                question(
                    "mq2-3",
                    "ما ناتج أي عدد × 0؟",
                    &["العدد نفسه", "واحد", "صفر", "لا يمكن الحساب"],
                    2,
                    "ضرب أي عدد في صفر يساوي صفراً",
                ),
                question(
                    "mq2-4",
                    "إذا كان لديك 4 صناديق وفي كل صندوق 5 أقلام، كم قلماً لديك؟",
                    &["9", "15", "20", "25"],
                    2,
                    "4 × 5 = 20",
                ),
                question(
                    "mq2-5",
                    "الضرب هو جمع...",
                    &["متكرر", "بسيط", "عكسي", "جزئي"],
                    0,
                    "الضرب جمع متكرر للعدد نفسه",
                ),
            ],
        },
        Quiz {
            id: "math-quiz-3".to_string(),
            lesson_id: "math-lesson-3".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "mq3-1",
                    "ما ناتج 20 ÷ 4؟",
                    &["4", "5", "6", "8"],
                    1,
                    "20 ÷ 4 = 5",
                ),
                question(
                    "mq3-2",
                    "ما ناتج 18 ÷ 3؟",
                    &["5", "6", "7", "9"],
                    1,
                    "18 ÷ 3 = 6",
                ),
                question(
                    "mq3-3",
                    "القسمة هي العملية العكسية لـ...",
                    &["الجمع", "الطرح", "الضرب", "لا شيء"],
                    2,
                    "نتحقق من القسمة بالضرب",
                ),
                question(
                    "mq3-4",
                    "ما ناتج قسمة أي عدد على نفسه؟",
                    &["صفر", "واحد", "العدد نفسه", "اثنان"],
                    1,
                    "العدد على نفسه يساوي واحداً",
                ),
                question(
                    "mq3-5",
                    "وزعنا 15 قطعة حلوى على 3 أطفال بالتساوي، كم قطعة لكل طفل؟",
                    &["3", "4", "5", "6"],
                    2,
                    "15 ÷ 3 = 5",
                ),
            ],
        },
        Quiz {
            id: "science-quiz-1".to_string(),
            lesson_id: "science-lesson-1".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "sq1-1",
                    "أي جزء من النبات يمتص الماء من التربة؟",
                    &["الأوراق", "الساق", "الجذور", "الزهرة"],
                    2,
                    "الجذور تمتص الماء والأملاح من التربة",
                ),
                question(
                    "sq1-2",
                    "أين يصنع النبات غذاءه؟",
                    &["الجذور", "الأوراق", "الساق", "الثمرة"],
                    1,
                    "الأوراق تصنع الغذاء بالبناء الضوئي",
                ),
                question(
                    "sq1-3",
                    "ما وظيفة الساق؟",
                    &[
                        "صنع الغذاء",
                        "امتصاص الماء",
                        "حمل الأوراق ونقل الماء",
                        "التكاثر",
                    ],
                    2,
                    "الساق يحمل الأوراق وينقل الماء إليها",
                ),
                question(
                    "sq1-4",
                    "أي جزء مسؤول عن التكاثر؟",
                    &["الزهرة", "الجذور", "الساق", "الأوراق"],
                    0,
                    "الزهرة تكون الثمار والبذور",
                ),
                question(
                    "sq1-5",
                    "ماذا يحتاج النبات لصنع غذائه؟",
                    &["الظلام", "ضوء الشمس", "الرمل", "الهواء البارد"],
                    1,
                    "البناء الضوئي يحتاج إلى ضوء الشمس",
                ),
            ],
        },
        Quiz {
            id: "science-quiz-2".to_string(),
            lesson_id: "science-lesson-2".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "sq2-1",
                    "ماذا يحدث لماء البحر عندما تسخنه الشمس؟",
                    &["يتجمد", "يتبخر", "يختفي", "يتلون"],
                    1,
                    "الحرارة تحول الماء إلى بخار",
                ),
                question(
                    "sq2-2",
                    "كيف تتكون السحب؟",
                    &["بالتبخر", "بالتكثف", "بالهطول", "بالجريان"],
                    1,
                    "البخار يبرد ويتكثف مكوناً السحب",
                ),
                question(
                    "sq2-3",
                    "ما اسم سقوط قطرات الماء من السحب؟",
                    &["التبخر", "التكثف", "الهطول", "الجريان"],
                    2,
                    "الهطول هو سقوط المطر",
                ),
                question(
                    "sq2-4",
                    "إلى أين يعود الماء بعد الهطول؟",
                    &["إلى الشمس", "إلى البحار والأنهار", "إلى الفضاء", "لا يعود"],
                    1,
                    "الجريان يعيد الماء إلى البحار والأنهار",
                ),
                question(
                    "sq2-5",
                    "لماذا لا ينفد الماء من كوكبنا؟",
                    &[
                        "لأن دورة الماء مستمرة",
                        "لأننا لا نستخدمه",
                        "لأن البحار صغيرة",
                        "لأن المطر نادر",
                    ],
                    0,
                    "دورة الماء تعيد الماء باستمرار",
                ),
            ],
        },
        Quiz {
            id: "science-quiz-3".to_string(),
            lesson_id: "science-lesson-3".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "sq3-1",
                    "أين تبدأ رحلة الطعام في الجسم؟",
                    &["المعدة", "الفم", "المريء", "الأمعاء"],
                    1,
                    "نمضغ الطعام في الفم أولاً",
                ),
                question(
                    "sq3-2",
                    "ما وظيفة المريء؟",
                    &["هضم الطعام", "نقل الطعام إلى المعدة", "امتصاص الغذاء", "المضغ"],
                    1,
                    "المريء أنبوب ينقل الطعام إلى المعدة",
                ),
                question(
                    "sq3-3",
                    "أين يمتص الجسم المواد الغذائية؟",
                    &["المعدة", "الفم", "الأمعاء الدقيقة", "الأمعاء الغليظة"],
                    2,
                    "الأمعاء الدقيقة تمتص الغذاء",
                ),
                question(
                    "sq3-4",
                    "ما وظيفة الأمعاء الغليظة؟",
                    &["المضغ", "الهضم", "التخلص من الفضلات", "التذوق"],
                    2,
                    "الأمعاء الغليظة تتخلص من الفضلات",
                ),
                question(
                    "sq3-5",
                    "لماذا يجب مضغ الطعام جيداً؟",
                    &[
                        "ليساعد الجهاز الهضمي",
                        "ليصبح الطعام ألذ",
                        "لنأكل أكثر",
                        "لا فائدة من المضغ",
                    ],
                    0,
                    "المضغ الجيد يسهل الهضم",
                ),
            ],
        },
        Quiz {
            id: "arabic-quiz-1".to_string(),
            lesson_id: "arabic-lesson-1".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "aq1-1",
                    "بماذا تبدأ الجملة الاسمية؟",
                    &["بفعل", "باسم", "بحرف", "بضمير"],
                    1,
                    "الجملة الاسمية تبدأ باسم",
                ),
                question(
                    "aq1-2",
                    "ما نوع جملة: يلعب الطفل؟",
                    &["اسمية", "فعلية", "استفهامية", "تعجبية"],
                    1,
                    "بدأت بفعل فهي جملة فعلية",
                ),
                question(
                    "aq1-3",
                    "ما نوع جملة: الشمس مشرقة؟",
                    &["اسمية", "فعلية", "ناقصة", "شرطية"],
                    0,
                    "بدأت باسم فهي جملة اسمية",
                ),
                question(
                    "aq1-4",
                    "مم تتكون الجملة الاسمية؟",
                    &["فعل وفاعل", "مبتدأ وخبر", "فعل ومفعول", "اسم وحرف"],
                    1,
                    "الجملة الاسمية مبتدأ وخبر",
                ),
                question(
                    "aq1-5",
                    "مم تتكون الجملة الفعلية؟",
                    &["مبتدأ وخبر", "فعل وفاعل", "اسمين", "حرفين"],
                    1,
                    "الجملة الفعلية فعل وفاعل",
                ),
            ],
        },
        Quiz {
            id: "arabic-quiz-2".to_string(),
            lesson_id: "arabic-lesson-2".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "aq2-1",
                    "ما المفعول به في جملة: قرأ الطالب الكتاب؟",
                    &["قرأ", "الطالب", "الكتاب", "لا يوجد"],
                    2,
                    "الكتاب هو ما وقعت عليه القراءة",
                ),
                question(
                    "aq2-2",
                    "ما إعراب المفعول به دائماً؟",
                    &["مرفوع", "منصوب", "مجرور", "مجزوم"],
                    1,
                    "المفعول به منصوب دائماً",
                ),
                question(
                    "aq2-3",
                    "بأي سؤال نجد المفعول به؟",
                    &["من فعل؟", "ماذا فعل الفاعل؟", "متى حدث؟", "أين حدث؟"],
                    1,
                    "جواب: ماذا فعل الفاعل؟ هو المفعول به",
                ),
                question(
                    "aq2-4",
                    "في أي نوع من الجمل يوجد المفعول به؟",
                    &["الاسمية", "الفعلية", "كلاهما", "لا يوجد"],
                    1,
                    "المفعول به في الجملة الفعلية فقط",
                ),
                question(
                    "aq2-5",
                    "ما المفعول به في جملة: كتب التلميذ الدرس؟",
                    &["كتب", "التلميذ", "الدرس", "لا يوجد"],
                    2,
                    "الدرس هو ما وقعت عليه الكتابة",
                ),
            ],
        },
        Quiz {
            id: "arabic-quiz-3".to_string(),
            lesson_id: "arabic-lesson-3".to_string(),
            time_limit: Some(10),
            questions: vec![
                question(
                    "aq3-1",
                    "أي ضمير يدل على المتكلم؟",
                    &["هو", "أنت", "أنا", "هم"],
                    2,
                    "أنا ضمير المتكلم",
                ),
                question(
                    "aq3-2",
                    "أي ضمير يدل على الغائب؟",
                    &["أنا", "نحن", "أنت", "هو"],
                    3,
                    "هو ضمير الغائب",
                ),
                question(
                    "aq3-3",
                    "لماذا نستخدم الضمائر؟",
                    &[
                        "لتجنب تكرار الأسماء",
                        "لإطالة الكلام",
                        "للزينة",
                        "بلا سبب",
                    ],
                    0,
                    "الضمائر تحل محل الاسم وتمنع التكرار",
                ),
                question(
                    "aq3-4",
                    "ما ضمير جماعة المتكلمين؟",
                    &["أنا", "نحن", "أنتم", "هن"],
                    1,
                    "نحن ضمير جماعة المتكلمين",
                ),
                question(
                    "aq3-5",
                    "أي ضمير نستخدم لمخاطبة شخص أمامنا؟",
                    &["هو", "أنا", "أنت", "هما"],
                    2,
                    "أنت ضمير المخاطب",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lesson_has_a_quiz_and_vice_versa() {
        let catalog = EmbeddedCatalog::new();
        for subject in catalog.all_subjects() {
            for lesson in &subject.lessons {
                let quiz = catalog.quiz(&lesson.quiz_id);
                assert!(quiz.is_some(), "lesson {} has no quiz", lesson.id);
                assert_eq!(quiz.unwrap().lesson_id, lesson.id);
            }
        }
        for quiz in catalog.quizzes() {
            assert!(catalog.lesson(&quiz.lesson_id).is_some());
        }
    }

    #[test]
    fn correct_answers_are_valid_indexes() {
        let catalog = EmbeddedCatalog::new();
        for quiz in catalog.quizzes() {
            for q in &quiz.questions {
                assert!(
                    q.correct_answer < q.options.len(),
                    "question {} has out-of-range answer",
                    q.id
                );
            }
        }
    }

    #[test]
    fn dashboard_subjects_exclude_empty_ones() {
        let catalog = EmbeddedCatalog::new();
        let offered = catalog.subjects();
        assert_eq!(offered.len(), 3);
        assert!(offered.iter().all(|s| !s.lessons.is_empty()));
        assert!(catalog.subject("english").is_some());
    }

    #[test]
    fn only_grade_five_is_available() {
        let catalog = EmbeddedCatalog::new();
        let available: Vec<_> = catalog.grades().iter().filter(|g| g.available).collect();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "grade-5");
    }
}
