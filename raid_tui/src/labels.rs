//! Localised UI text

use raid_core::{Language, RaidDuration, StatField};

/// One question and answer of the help tab FAQ
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub downed: &'static str,
    pub kills: &'static str,
    pub dmg_dealt: &'static str,
    pub dmg_taken: &'static str,
    pub hours: &'static str,
    pub placeholder_example: &'static str,
    pub dmg_ratio: &'static str,
    pub dmg_per_kill: &'static str,
    pub estimated_deaths: &'static str,
    pub kd: &'static str,
    pub stats_per_hour: &'static str,
    pub stats_per_raid: &'static str,
    pub metric: &'static str,
    pub value: &'static str,
    pub min20: &'static str,
    pub min25: &'static str,
    pub min30: &'static str,
    pub deaths_estimate: &'static str,
    pub share_results: &'static str,
    pub share_link: &'static str,
    pub copy_text: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub enter_data: &'static str,
    pub enter_stats: &'static str,
    pub footer: &'static str,
    pub language: &'static str,
    pub faq_title: &'static str,
    pub faq: &'static [FaqEntry],
}

impl Labels {
    pub fn field(&self, field: StatField) -> &'static str {
        match field {
            StatField::Downed => self.downed,
            StatField::Kills => self.kills,
            StatField::DmgDealt => self.dmg_dealt,
            StatField::DmgTaken => self.dmg_taken,
            StatField::Hours => self.hours,
        }
    }

    pub fn raid(&self, duration: RaidDuration) -> &'static str {
        match duration {
            RaidDuration::Twenty => self.min20,
            RaidDuration::TwentyFive => self.min25,
            RaidDuration::Thirty => self.min30,
        }
    }

    /// Hint shown in an empty input, e.g. `e.g., 500k`
    pub fn placeholder(&self, field: StatField) -> String {
        let example = match field {
            StatField::Downed => "4000",
            StatField::Kills => "3000",
            StatField::DmgDealt => "500k",
            StatField::DmgTaken => "100k",
            StatField::Hours => "200",
        };
        format!("{}, {}", self.placeholder_example, example)
    }
}

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Ru => &RU,
        Language::Uk => &UK,
    }
}

static EN: Labels = Labels {
    title: "ARC Raiders Stats Calculator",
    subtitle: "Calculate stats: damage, K/D, per hour & per raid metrics",
    downed: "Downed",
    kills: "Kills",
    dmg_dealt: "Damage Dealt",
    dmg_taken: "Damage Taken",
    hours: "Surface Time (hours)",
    placeholder_example: "e.g.",
    dmg_ratio: "Damage Ratio",
    dmg_per_kill: "Damage per Kill",
    estimated_deaths: "Est. Deaths",
    kd: "K/D",
    stats_per_hour: "Stats per Hour",
    stats_per_raid: "Stats per Raid",
    metric: "Metric",
    value: "Value",
    min20: "20 min",
    min25: "25 min",
    min30: "30 min",
    deaths_estimate: "Deaths (est.)",
    share_results: "Share Results",
    share_link: "Share",
    copy_text: "Copy",
    copied: "Copied!",
    copy_failed: "Copy failed",
    enter_data: "Enter kills and hours to calculate stats",
    enter_stats: "Enter Your Stats",
    footer: "Auto-calculation • Supports k/m notation",
    language: "Language",
    faq_title: "Frequently Asked Questions",
    faq: &FAQ_EN,
};

static RU: Labels = Labels {
    title: "ARC Raiders Stats Calculator",
    subtitle: "Расчёт статистики: урон, K/D, показатели на час и рейд",
    downed: "Выведено из строя",
    kills: "Нокауты (Kills)",
    dmg_dealt: "Урон нанесён",
    dmg_taken: "Урон получен",
    hours: "Время на поверхности (часы)",
    placeholder_example: "например",
    dmg_ratio: "Соотношение урона",
    dmg_per_kill: "Урон на нокаут",
    estimated_deaths: "Оценка смертей",
    kd: "K/D",
    stats_per_hour: "Статистика на час",
    stats_per_raid: "Показатели на рейд",
    metric: "Показатель",
    value: "Значение",
    min20: "20 мин",
    min25: "25 мин",
    min30: "30 мин",
    deaths_estimate: "Смерти (оценка)",
    share_results: "Поделиться результатами",
    share_link: "Поделиться",
    copy_text: "Копировать",
    copied: "Скопировано!",
    copy_failed: "Не удалось скопировать",
    enter_data: "Введите киллы и время для расчёта статистики",
    enter_stats: "Введите данные",
    footer: "Автоматический расчёт • Поддержка k/m нотации",
    language: "Язык",
    faq_title: "Часто задаваемые вопросы",
    faq: &FAQ_RU,
};

static UK: Labels = Labels {
    title: "ARC Raiders Stats Calculator",
    subtitle: "Розрахунок статистики: урон, K/D, показники на годину та рейд",
    downed: "Виведено з ладу",
    kills: "Нокаути (Kills)",
    dmg_dealt: "Урон завдано",
    dmg_taken: "Урон отримано",
    hours: "Час на поверхні (години)",
    placeholder_example: "наприклад",
    dmg_ratio: "Співвідношення урону",
    dmg_per_kill: "Урон на нокаут",
    estimated_deaths: "Оцінка смертей",
    kd: "K/D",
    stats_per_hour: "Статистика на годину",
    stats_per_raid: "Показники на рейд",
    metric: "Показник",
    value: "Значення",
    min20: "20 хв",
    min25: "25 хв",
    min30: "30 хв",
    deaths_estimate: "Смерті (оцінка)",
    share_results: "Поділитися результатами",
    share_link: "Поділитися",
    copy_text: "Копіювати",
    copied: "Скопійовано!",
    copy_failed: "Не вдалося скопіювати",
    enter_data: "Введіть кіли та час для розрахунку статистики",
    enter_stats: "Введіть дані",
    footer: "Автоматичний розрахунок • Підтримка k/m нотації",
    language: "Мова",
    faq_title: "Часті запитання",
    faq: &FAQ_UK,
};

static FAQ_EN: [FaqEntry; 6] = [
    FaqEntry {
        question: "Where to find stats in ARC Raiders?",
        answer: "Go to the main game menu → top left select the 3rd option 'Raider' → bottom right click the book icon 'Codex' → top left select 'Player Statistics' → in the filter (default 'All') select 'Combat' → scroll down to the bottom, all needed stats are listed from bottom to top.",
    },
    FaqEntry {
        question: "What does 'Downed' mean?",
        answer: "This is the number of times you knocked down an opponent (but didn't finish them). It differs from final kills, which are only counted when fully eliminating a player.",
    },
    FaqEntry {
        question: "How is K/D calculated?",
        answer: "K/D = Kills ÷ Estimated Deaths. Estimated deaths are calculated as: Damage Taken ÷ Average Damage per Kill. This is an approximation since the game doesn't show exact death count.",
    },
    FaqEntry {
        question: "What is damage ratio?",
        answer: "Damage Ratio = Damage Dealt ÷ Damage Taken. A value of 5x means you deal 5 times more damage than you receive. A good ratio is 2x or higher.",
    },
    FaqEntry {
        question: "How to enter large numbers?",
        answer: "Use shortcuts: 500k = 500,000, 1.5m = 1,500,000. The calculator automatically recognizes these formats.",
    },
    FaqEntry {
        question: "What does 'Stats per Raid' show?",
        answer: "These are your average stats per single raid. Calculated for raids lasting 20, 25, and 30 minutes based on your total playtime.",
    },
];

static FAQ_RU: [FaqEntry; 6] = [
    FaqEntry {
        question: "Где найти статистику в ARC Raiders?",
        answer: "Зайдите в главное меню игры → слева вверху выберите 3-й пункт 'Рейдер' → справа внизу нажмите на иконку книжки 'Кодекс' → слева вверху выберите 'Статистика Игрока' → в фильтре (по умолчанию 'Все') выберите 'Бой' → пролистайте вниз до конца, там снизу вверх расположены все нужные показатели.",
    },
    FaqEntry {
        question: "Что означает 'Выведено из строя' (Downed)?",
        answer: "Это количество раз, когда вы сбили противника с ног (но не добили). Отличается от финальных нокаутов (kills), которые засчитываются только при полном устранении.",
    },
    FaqEntry {
        question: "Как рассчитывается K/D?",
        answer: "K/D = Нокауты ÷ Оценка смертей. Оценка смертей вычисляется как: Урон получен ÷ Средний урон на нокаут. Это приблизительное значение, так как игра не показывает точное число смертей.",
    },
    FaqEntry {
        question: "Что такое соотношение урона?",
        answer: "Соотношение урона = Урон нанесён ÷ Урон получен. Значение 5x означает, что вы наносите в 5 раз больше урона, чем получаете. Хороший показатель — от 2x и выше.",
    },
    FaqEntry {
        question: "Как вводить большие числа?",
        answer: "Используйте сокращения: 500k = 500,000, 1.5m = 1,500,000. Калькулятор автоматически распознает эти форматы.",
    },
    FaqEntry {
        question: "Что показывает 'Статистика на рейд'?",
        answer: "Это ваши средние показатели за один рейд. Рассчитывается для рейдов длительностью 20, 25 и 30 минут на основе общего времени игры.",
    },
];

static FAQ_UK: [FaqEntry; 6] = [
    FaqEntry {
        question: "Де знайти статистику в ARC Raiders?",
        answer: "Зайдіть в головне меню гри → зліва вгорі виберіть 3-й пункт 'Рейдер' → справа внизу натисніть на іконку книжки 'Кодекс' → зліва вгорі виберіть 'Статистика Гравця' → у фільтрі (за замовчуванням 'Все') виберіть 'Бій' → прогорніть вниз до кінця, там знизу вгору розташовані всі потрібні показники.",
    },
    FaqEntry {
        question: "Що означає 'Виведено з ладу' (Downed)?",
        answer: "Це кількість разів, коли ви збили противника з ніг (але не добили). Відрізняється від фінальних нокаутів (kills), які зараховуються лише при повному усуненні.",
    },
    FaqEntry {
        question: "Як розраховується K/D?",
        answer: "K/D = Нокаути ÷ Оцінка смертей. Оцінка смертей обчислюється як: Урон отримано ÷ Середній урон на нокаут. Це приблизне значення, оскільки гра не показує точне число смертей.",
    },
    FaqEntry {
        question: "Що таке співвідношення урону?",
        answer: "Співвідношення урону = Урон завдано ÷ Урон отримано. Значення 5x означає, що ви завдаєте в 5 разів більше урону, ніж отримуєте. Гарний показник — від 2x і вище.",
    },
    FaqEntry {
        question: "Як вводити великі числа?",
        answer: "Використовуйте скорочення: 500k = 500,000, 1.5m = 1,500,000. Калькулятор автоматично розпізнає ці формати.",
    },
    FaqEntry {
        question: "Що показує 'Статистика на рейд'?",
        answer: "Це ваші середні показники за один рейд. Розраховується для рейдів тривалістю 20, 25 і 30 хвилин на основі загального часу гри.",
    },
];
