//! The embedded content table: all eighteen chapters with their names,
//! themes, descriptions and key teachings, plus the shlokas authored so
//! far and the gallery records. Built once at startup; never mutated.

use crate::models::{Chapter, GalleryImage, KeyTeachings, LocalizedText, Shloka};

fn text(en: &str, hi: &str) -> LocalizedText {
    LocalizedText::new(en, hi)
}

fn teachings(en: &[&str], hi: &[&str]) -> Option<KeyTeachings> {
    Some(KeyTeachings {
        en: en.iter().map(|s| s.to_string()).collect(),
        hi: hi.iter().map(|s| s.to_string()).collect(),
    })
}

pub fn chapters() -> Vec<Chapter> {
    vec![
        Chapter {
            number: 1,
            name_hindi: "अर्जुन विषाद योग".into(),
            name_english: "Arjuna Vishada Yoga".into(),
            name_sanskrit: "अर्जुनविषादयोगः".into(),
            subtitle: "The Yoga of Arjuna's Dejection".into(),
            verses: 47,
            theme: "Confusion and despair".into(),
            description: text(
                "Arjuna's moral dilemma on the battlefield of Kurukshetra, questioning the righteousness of war against his own kinsmen.",
                "कुरुक्षेत्र के युद्ध के मैदान में अर्जुन की नैतिक दुविधा, अपने ही परिजनों के खिलाफ युद्ध की धार्मिकता पर सवाल उठाते हुए।",
            ),
            key_teachings: teachings(
                &[
                    "Moral dilemmas are part of human existence",
                    "Emotional attachment can cloud judgment",
                    "The importance of seeking divine guidance in crisis",
                    "Understanding one's duty (dharma) is essential",
                ],
                &[
                    "नैतिक दुविधाएं मानव अस्तित्व का हिस्सा हैं",
                    "भावनात्मक लगाव निर्णय को धुंधला कर सकता है",
                    "संकट में दिव्य मार्गदर्शन प्राप्त करने का महत्व",
                    "अपने कर्तव्य (धर्म) को समझना आवश्यक है",
                ],
            ),
            youtube_video_id: Some("ey6s1L7WJT4".into()),
            shlokas: vec![Shloka {
                number: 1,
                sanskrit: "धृतराष्ट्र उवाच। धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः। मामकाः पाण्डवाश्चैव किमकुर्वत सञ्जय।।".into(),
                transliteration: "dhritarashtra uvacha | dharma-kshetre kuru-kshetre samaveta yuyutsavah | mamakah pandavash chaiva kimakurvata sanjaya ||".into(),
                translation: text(
                    "Dhritarashtra said: O Sanjaya, after gathering on the holy field of Kurukshetra, desiring to fight, what did my sons and the sons of Pandu do?",
                    "धृतराष्ट्र ने कहा: हे संजय, धर्मभूमि कुरुक्षेत्र में युद्ध की इच्छा से एकत्र होकर मेरे और पांडु के पुत्रों ने क्या किया?",
                ),
                commentary: text(
                    "This opening verse sets the stage for the Bhagwad Gita. Dhritarashtra, the blind king, asks his charioteer Sanjaya about the events on the battlefield, revealing his anxiety about the outcome.",
                    "यह प्रारंभिक श्लोक भगवद गीता के लिए मंच तैयार करता है। अंधे राजा धृतराष्ट्र अपने सारथी संजय से युद्धक्षेत्र की घटनाओं के बारे में पूछते हैं, जो परिणाम के बारे में उनकी चिंता को प्रकट करता है।",
                ),
                audio_url: Some("/audio/chapter-1/verse-1.mp3".into()),
            }],
        },
        Chapter {
            number: 2,
            name_hindi: "सांख्य योग".into(),
            name_english: "Sankhya Yoga".into(),
            name_sanskrit: "सांख्ययोगः".into(),
            subtitle: "The Yoga of Knowledge".into(),
            verses: 72,
            theme: "Knowledge of the self".into(),
            description: text(
                "Krishna teaches Arjuna about the eternal soul, the nature of reality, and the path of selfless action.",
                "कृष्ण अर्जुन को शाश्वत आत्मा, वास्तविकता की प्रकृति और निस्वार्थ कर्म के मार्ग के बारे में सिखाते हैं।",
            ),
            key_teachings: teachings(
                &[
                    "The soul is eternal and indestructible",
                    "The body is temporary and subject to change",
                    "Perform your duty without attachment to results",
                    "Equanimity in success and failure leads to peace",
                    "Knowledge of the self liberates from grief",
                ],
                &[
                    "आत्मा शाश्वत और अविनाशी है",
                    "शरीर अस्थायी और परिवर्तन के अधीन है",
                    "फल की आसक्ति के बिना अपना कर्तव्य निभाएं",
                    "सफलता और असफलता में समभाव शांति की ओर ले जाता है",
                    "आत्म-ज्ञान दुःख से मुक्त करता है",
                ],
            ),
            youtube_video_id: Some("4YfY3jW8MQM".into()),
            shlokas: vec![Shloka {
                number: 47,
                sanskrit: "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन। मा कर्मफलहेतुर्भूर्मा ते सङ्गोऽस्त्वकर्मणि।।".into(),
                transliteration: "karmany evadhikaras te ma phaleshu kadachana | ma karma-phala-hetur bhur ma te sango 'stv akarmani ||".into(),
                translation: text(
                    "You have a right to perform your prescribed duty, but you are not entitled to the fruits of action. Never consider yourself the cause of the results of your activities, and never be attached to not doing your duty.",
                    "तुम्हारा कर्म करने में अधिकार है, परन्तु फल में कभी नहीं। कर्मफल का हेतु मत बनो और न ही कर्म न करने में आसक्त होओ।",
                ),
                commentary: text(
                    "This is one of the most famous verses of the Gita, teaching the principle of Karma Yoga - performing one's duty without attachment to results.",
                    "यह गीता के सबसे प्रसिद्ध श्लोकों में से एक है, जो कर्म योग के सिद्धांत को सिखाता है - फल की आसक्ति के बिना अपने कर्तव्य का पालन करना।",
                ),
                audio_url: Some("/audio/chapter-2/verse-47.mp3".into()),
            }],
        },
        Chapter {
            number: 3,
            name_hindi: "कर्म योग".into(),
            name_english: "Karma Yoga".into(),
            name_sanskrit: "कर्मयोगः".into(),
            subtitle: "The Yoga of Action".into(),
            verses: 43,
            theme: "Path of selfless action".into(),
            description: text(
                "The importance of performing one's duty without attachment to results and the concept of selfless service.",
                "परिणामों के प्रति आसक्ति के बिना अपने कर्तव्य को निभाने का महत्व और निस्वार्थ सेवा की अवधारणा।",
            ),
            key_teachings: teachings(
                &[
                    "Action is inevitable and necessary for existence",
                    "Perform duties as a service to others and to God",
                    "Work without selfish motives and ego",
                    "Lead by example through righteous action",
                    "Sacrifice and selfless service purify the mind",
                ],
                &[
                    "कर्म अनिवार्य और अस्तित्व के लिए आवश्यक है",
                    "दूसरों और भगवान की सेवा के रूप में कर्तव्यों का पालन करें",
                    "स्वार्थी उद्देश्यों और अहंकार के बिना काम करें",
                    "धार्मिक कर्म के माध्यम से उदाहरण प्रस्तुत करें",
                    "त्याग और निस्वार्थ सेवा मन को शुद्ध करती है",
                ],
            ),
            youtube_video_id: Some("wxdHciSZe8U".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 4,
            name_hindi: "ज्ञान कर्म संन्यास योग".into(),
            name_english: "Jnana Karma Sanyasa Yoga".into(),
            name_sanskrit: "ज्ञानकर्मसंन्यासयोगः".into(),
            subtitle: "The Yoga of Wisdom and Action".into(),
            verses: 42,
            theme: "Divine manifestation".into(),
            description: text(
                "Divine incarnations, the significance of sacrifice, and the relationship between knowledge and action.",
                "दिव्य अवतार, बलिदान का महत्व, और ज्ञान और कर्म के बीच संबंध।",
            ),
            key_teachings: teachings(
                &[
                    "God incarnates to protect righteousness and destroy evil",
                    "Divine knowledge must be received from a qualified teacher",
                    "Action performed in knowledge does not bind",
                    "Sacrifice purifies and elevates consciousness",
                    "Transcendental knowledge burns all karmic reactions",
                ],
                &[
                    "भगवान धर्म की रक्षा और बुराई को नष्ट करने के लिए अवतार लेते हैं",
                    "दिव्य ज्ञान एक योग्य शिक्षक से प्राप्त होना चाहिए",
                    "ज्ञान में किया गया कर्म बांधता नहीं है",
                    "यज्ञ चेतना को शुद्ध और उन्नत करता है",
                    "आध्यात्मिक ज्ञान सभी कर्म प्रतिक्रियाओं को जला देता है",
                ],
            ),
            youtube_video_id: Some("5JLxN_Tcdis".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 5,
            name_hindi: "कर्म संन्यास योग".into(),
            name_english: "Karma Sanyasa Yoga".into(),
            name_sanskrit: "कर्मसंन्यासयोगः".into(),
            subtitle: "The Yoga of Renunciation".into(),
            verses: 29,
            theme: "Renunciation through action".into(),
            description: text(
                "The path of renunciation and the yoga of action, explaining their complementary nature.",
                "संन्यास का मार्ग और कर्म योग, उनकी पूरक प्रकृति की व्याख्या।",
            ),
            key_teachings: teachings(
                &[
                    "Both renunciation and action lead to liberation",
                    "Action yoga is easier and safer than complete renunciation",
                    "See God in all beings and all beings in God",
                    "Control of mind and senses leads to tranquility",
                    "True knowledge brings equality of vision",
                ],
                &[
                    "संन्यास और कर्म दोनों मुक्ति की ओर ले जाते हैं",
                    "कर्म योग पूर्ण संन्यास से आसान और सुरक्षित है",
                    "सभी प्राणियों में भगवान को और भगवान में सभी प्राणियों को देखें",
                    "मन और इंद्रियों का नियंत्रण शांति की ओर ले जाता है",
                    "सच्चा ज्ञान समदर्शिता लाता है",
                ],
            ),
            youtube_video_id: Some("P-OMH-VJXf0".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 6,
            name_hindi: "ध्यान योग".into(),
            name_english: "Dhyana Yoga".into(),
            name_sanskrit: "ध्यानयोगः".into(),
            subtitle: "The Yoga of Meditation".into(),
            verses: 47,
            theme: "Meditation and mind control".into(),
            description: text(
                "The practice of meditation, controlling the mind, and achieving inner peace and self-realization.",
                "ध्यान का अभ्यास, मन को नियंत्रित करना, और आंतरिक शांति और आत्म-साक्षात्कार प्राप्त करना।",
            ),
            key_teachings: teachings(
                &[
                    "The mind must be trained through practice and detachment",
                    "Moderation in all activities supports yoga practice",
                    "A controlled mind is your best friend, uncontrolled is your worst enemy",
                    "Yoga is broken in birth but can be resumed in the next life",
                    "The supreme yogi is one who is devoted to God with love",
                ],
                &[
                    "मन को अभ्यास और वैराग्य के माध्यम से प्रशिक्षित किया जाना चाहिए",
                    "सभी गतिविधियों में संयम योग अभ्यास का समर्थन करता है",
                    "एक नियंत्रित मन आपका सबसे अच्छा मित्र है, अनियंत्रित सबसे बुरा शत्रु है",
                    "योग जन्म में टूट जाता है लेकिन अगले जन्म में फिर से शुरू किया जा सकता है",
                    "सर्वोच्च योगी वह है जो प्रेम के साथ भगवान को समर्पित है",
                ],
            ),
            youtube_video_id: Some("uK_TL8Cm_rI".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 7,
            name_hindi: "ज्ञान विज्ञान योग".into(),
            name_english: "Jnana Vijnana Yoga".into(),
            name_sanskrit: "ज्ञानविज्ञानयोगः".into(),
            subtitle: "The Yoga of Knowledge and Wisdom".into(),
            verses: 30,
            theme: "Divine knowledge".into(),
            description: text(
                "The distinction between material and spiritual knowledge, and the nature of the Supreme.",
                "भौतिक और आध्यात्मिक ज्ञान के बीच अंतर, और परमात्मा की प्रकृति।",
            ),
            key_teachings: teachings(
                &[
                    "Knowledge of God includes both theoretical and practical understanding",
                    "Material nature consists of three modes that bind the soul",
                    "God is the source of all creation",
                    "Four types of people worship God with different motivations",
                    "Direct realization of God is rare and precious",
                ],
                &[
                    "भगवान का ज्ञान सैद्धांतिक और व्यावहारिक दोनों समझ को शामिल करता है",
                    "भौतिक प्रकृति में तीन गुण होते हैं जो आत्मा को बांधते हैं",
                    "भगवान सभी सृष्टि के स्रोत हैं",
                    "चार प्रकार के लोग विभिन्न प्रेरणाओं से भगवान की पूजा करते हैं",
                    "भगवान की प्रत्यक्ष प्राप्ति दुर्लभ और मूल्यवान है",
                ],
            ),
            youtube_video_id: Some("w3l-zxYQ3Po".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 8,
            name_hindi: "अक्षर ब्रह्म योग".into(),
            name_english: "Aksara Brahma Yoga".into(),
            name_sanskrit: "अक्षरब्रह्मयोगः".into(),
            subtitle: "The Yoga of the Imperishable Absolute".into(),
            verses: 28,
            theme: "Path to the Supreme".into(),
            description: text(
                "The imperishable Brahman, the supreme destination, and the moment of death's significance.",
                "अविनाशी ब्रह्म, परम गंतव्य, और मृत्यु के क्षण का महत्व।",
            ),
            key_teachings: teachings(
                &[
                    "Constant remembrance of God leads to attaining Him",
                    "The state of mind at death determines the next life",
                    "Different paths exist for souls after leaving the body",
                    "Regular practice makes remembrance natural at death",
                    "Devotion to Krishna ensures return to the spiritual world",
                ],
                &[
                    "भगवान का निरंतर स्मरण उन्हें प्राप्त करने की ओर ले जाता है",
                    "मृत्यु के समय मन की स्थिति अगले जीवन को निर्धारित करती है",
                    "शरीर छोड़ने के बाद आत्माओं के लिए विभिन्न मार्ग मौजूद हैं",
                    "नियमित अभ्यास मृत्यु के समय स्मरण को स्वाभाविक बनाता है",
                    "कृष्ण की भक्ति आध्यात्मिक संसार में वापसी सुनिश्चित करती है",
                ],
            ),
            youtube_video_id: Some("bxULfbHKfjo".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 9,
            name_hindi: "राज विद्या राज गुह्य योग".into(),
            name_english: "Raja Vidya Raja Guhya Yoga".into(),
            name_sanskrit: "राजविद्याराजगुह्ययोगः".into(),
            subtitle: "The Yoga of Royal Knowledge".into(),
            verses: 34,
            theme: "Supreme secret".into(),
            description: text(
                "The most confidential knowledge about devotion and God's immanence in all creation.",
                "भक्ति और सभी सृष्टि में भगवान की उपस्थिति के बारे में सबसे गोपनीय ज्ञान।",
            ),
            key_teachings: teachings(
                &[
                    "This knowledge is the king of all knowledge",
                    "God pervades everything yet remains transcendent",
                    "Simple devotion is more powerful than complex rituals",
                    "God accepts offerings made with love",
                    "Those who worship with devotion never perish",
                ],
                &[
                    "यह ज्ञान सभी ज्ञान का राजा है",
                    "भगवान सब कुछ व्याप्त करते हैं फिर भी परमात्मा बने रहते हैं",
                    "सरल भक्ति जटिल अनुष्ठानों से अधिक शक्तिशाली है",
                    "भगवान प्रेम से दी गई भेंट स्वीकार करते हैं",
                    "जो भक्ति के साथ पूजा करते हैं वे कभी नष्ट नहीं होते",
                ],
            ),
            youtube_video_id: Some("HqQ-5vR0yDw".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 10,
            name_hindi: "विभूति योग".into(),
            name_english: "Vibhuti Yoga".into(),
            name_sanskrit: "विभूतियोगः".into(),
            subtitle: "The Yoga of Divine Glories".into(),
            verses: 42,
            theme: "Divine manifestations".into(),
            description: text(
                "The divine manifestations and glories of the Supreme in the material world.",
                "भौतिक जगत में परमात्मा की दिव्य अभिव्यक्तियाँ और महिमा।",
            ),
            key_teachings: teachings(
                &[
                    "God is present in the most excellent of all categories",
                    "Recognizing divine presence in creation leads to devotion",
                    "God is the source of all opulences",
                    "Knowledge of God's glories increases love for Him",
                    "Everything wonderful in creation is a spark of divine glory",
                ],
                &[
                    "भगवान सभी श्रेणियों के सबसे उत्कृष्ट में मौजूद हैं",
                    "सृष्टि में दिव्य उपस्थिति को पहचानना भक्ति की ओर ले जाता है",
                    "भगवान सभी ऐश्वर्यों के स्रोत हैं",
                    "भगवान की महिमा का ज्ञान उनके लिए प्रेम बढ़ाता है",
                    "सृष्टि में सब कुछ अद्भुत दिव्य महिमा की चिंगारी है",
                ],
            ),
            youtube_video_id: Some("nV4L8Hj7Pos".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 11,
            name_hindi: "विश्वरूप दर्शन योग".into(),
            name_english: "Vishvarupa Darshana Yoga".into(),
            name_sanskrit: "विश्वरूपदर्शनयोगः".into(),
            subtitle: "The Yoga of the Universal Form".into(),
            verses: 55,
            theme: "Cosmic vision".into(),
            description: text(
                "Krishna reveals His universal form to Arjuna, displaying the entire cosmos within Him.",
                "कृष्ण अर्जुन को अपना विश्वरूप दिखाते हैं, उनमें संपूर्ण ब्रह्मांड को प्रदर्शित करते हुए।",
            ),
            key_teachings: teachings(
                &[
                    "God's form is beyond material comprehension",
                    "Divine vision is required to see God's universal form",
                    "Everything exists within the Supreme",
                    "God is both immanent and transcendent",
                    "Pure devotion is superior to being awed by power",
                ],
                &[
                    "भगवान का रूप भौतिक समझ से परे है",
                    "भगवान के विश्वरूप को देखने के लिए दिव्य दृष्टि की आवश्यकता है",
                    "सब कुछ परमात्मा के भीतर अस्तित्व में है",
                    "भगवान अंतर्निहित और परमात्मा दोनों हैं",
                    "शुद्ध भक्ति शक्ति से विस्मित होने से बेहतर है",
                ],
            ),
            youtube_video_id: Some("DZKx5N0-xGM".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 12,
            name_hindi: "भक्ति योग".into(),
            name_english: "Bhakti Yoga".into(),
            name_sanskrit: "भक्तियोगः".into(),
            subtitle: "The Yoga of Devotion".into(),
            verses: 20,
            theme: "Path of devotion".into(),
            description: text(
                "The path of devotion and love towards God as the highest form of yoga.",
                "भगवान के प्रति भक्ति और प्रेम का मार्ग योग के सर्वोच्च रूप के रूप में।",
            ),
            key_teachings: teachings(
                &[
                    "Devotion to the personal form of God is the easiest path",
                    "True devotees are dear to everyone and everyone is dear to them",
                    "Equanimity and compassion are marks of devotion",
                    "Even small steps in devotion lead to great results",
                    "God reciprocates with those who love Him",
                ],
                &[
                    "भगवान के व्यक्तिगत रूप की भक्ति सबसे आसान मार्ग है",
                    "सच्चे भक्त सभी को प्रिय होते हैं और सभी उन्हें प्रिय होते हैं",
                    "समभाव और करुणा भक्ति के चिह्न हैं",
                    "भक्ति में छोटे कदम भी महान परिणाम की ओर ले जाते हैं",
                    "भगवान उनके साथ प्रतिक्रिया करते हैं जो उनसे प्रेम करते हैं",
                ],
            ),
            youtube_video_id: Some("EkN7w-LPCRY".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 13,
            name_hindi: "क्षेत्र क्षेत्रज्ञ विभाग योग".into(),
            name_english: "Kshetra Kshetrajna Vibhaga Yoga".into(),
            name_sanskrit: "क्षेत्रक्षेत्रज्ञविभागयोगः".into(),
            subtitle: "The Yoga of the Field and Knower".into(),
            verses: 35,
            theme: "Matter and spirit".into(),
            description: text(
                "The distinction between the body (field) and the soul (knower of the field).",
                "शरीर (क्षेत्र) और आत्मा (क्षेत्र के ज्ञाता) के बीच अंतर।",
            ),
            key_teachings: teachings(
                &[
                    "The body is the field, the soul is the knower",
                    "Knowledge means understanding this distinction",
                    "Humility and detachment are signs of true knowledge",
                    "The Supreme Soul witnesses from within all bodies",
                    "Realizing the difference between matter and spirit brings liberation",
                ],
                &[
                    "शरीर क्षेत्र है, आत्मा ज्ञाता है",
                    "ज्ञान का अर्थ है इस अंतर को समझना",
                    "विनम्रता और वैराग्य सच्चे ज्ञान के संकेत हैं",
                    "परमात्मा सभी शरीरों के भीतर से साक्षी है",
                    "पदार्थ और आत्मा के बीच अंतर को समझना मुक्ति लाता है",
                ],
            ),
            youtube_video_id: Some("4OcEy7m_Qk4".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 14,
            name_hindi: "गुणत्रय विभाग योग".into(),
            name_english: "Gunatraya Vibhaga Yoga".into(),
            name_sanskrit: "गुणत्रयविभागयोगः".into(),
            subtitle: "The Yoga of Three Modes".into(),
            verses: 27,
            theme: "Three modes of nature".into(),
            description: text(
                "The three modes of material nature (gunas) and their influence on living beings.",
                "प्रकृति के तीन गुण (सत्व, रजस, तमस) और जीवों पर उनका प्रभाव।",
            ),
            key_teachings: teachings(
                &[
                    "Three gunas influence all living beings",
                    "Sattva binds through happiness and knowledge",
                    "Rajas binds through attachment to action and results",
                    "Tamas binds through ignorance and laziness",
                    "Transcending the gunas through devotion brings liberation",
                ],
                &[
                    "तीन गुण सभी जीवों को प्रभावित करते हैं",
                    "सत्व सुख और ज्ञान के माध्यम से बांधता है",
                    "रजस कर्म और परिणामों की आसक्ति के माध्यम से बांधता है",
                    "तमस अज्ञान और आलस्य के माध्यम से बांधता है",
                    "भक्ति के माध्यम से गुणों को पार करना मुक्ति लाता है",
                ],
            ),
            youtube_video_id: Some("cq5jzN_G1Zc".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 15,
            name_hindi: "पुरुषोत्तम योग".into(),
            name_english: "Purushottama Yoga".into(),
            name_sanskrit: "पुरुषोत्तमयोगः".into(),
            subtitle: "The Yoga of the Supreme Person".into(),
            verses: 20,
            theme: "Supreme being".into(),
            description: text(
                "The Supreme Person who transcends both the perishable and imperishable.",
                "परम पुरुष जो नाशवान और अविनाशी दोनों से परे हैं।",
            ),
            key_teachings: teachings(
                &[
                    "The material world is like an inverted tree with roots above",
                    "One must cut attachment to this world with determination",
                    "The Supreme Person is beyond the perishable and imperishable",
                    "Knowing Krishna as Purushottama brings complete knowledge",
                    "Such knowledge leads to worship with full heart",
                ],
                &[
                    "भौतिक संसार ऊपर की जड़ों वाले उल्टे पेड़ की तरह है",
                    "इस संसार की आसक्ति को दृढ़ता से काटना चाहिए",
                    "परम पुरुष नाशवान और अविनाशी दोनों से परे है",
                    "कृष्ण को पुरुषोत्तम के रूप में जानना पूर्ण ज्ञान लाता है",
                    "ऐसा ज्ञान पूर्ण हृदय से पूजा की ओर ले जाता है",
                ],
            ),
            youtube_video_id: Some("8pUz0vMm_ro".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 16,
            name_hindi: "दैवासुर सम्पद विभाग योग".into(),
            name_english: "Daivasura Sampad Vibhaga Yoga".into(),
            name_sanskrit: "दैवासुरसम्पद्विभागयोगः".into(),
            subtitle: "The Yoga of Divine and Demonic".into(),
            verses: 24,
            theme: "Divine vs demonic traits".into(),
            description: text(
                "The divine and demonic qualities in human beings and their consequences.",
                "मनुष्यों में दैवीय और आसुरी गुण और उनके परिणाम।",
            ),
            key_teachings: teachings(
                &[
                    "Divine qualities include fearlessness, purity, and compassion",
                    "Demonic qualities include pride, anger, and arrogance",
                    "Following scriptures leads to elevation",
                    "Ignoring scriptures leads to degradation",
                    "Self-knowledge helps in cultivating divine qualities",
                ],
                &[
                    "दैवीय गुणों में निर्भयता, पवित्रता और करुणा शामिल हैं",
                    "आसुरी गुणों में अभिमान, क्रोध और घमंड शामिल हैं",
                    "शास्त्रों का पालन उन्नति की ओर ले जाता है",
                    "शास्त्रों की उपेक्षा अधोगति की ओर ले जाती है",
                    "आत्म-ज्ञान दैवीय गुणों को विकसित करने में मदद करता है",
                ],
            ),
            youtube_video_id: Some("0cqSj6Gu4hk".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 17,
            name_hindi: "श्रद्धात्रय विभाग योग".into(),
            name_english: "Shraddhatraya Vibhaga Yoga".into(),
            name_sanskrit: "श्रद्धात्रयविभागयोगः".into(),
            subtitle: "The Yoga of Three Kinds of Faith".into(),
            verses: 28,
            theme: "Types of faith".into(),
            description: text(
                "The three types of faith corresponding to the three gunas and their expressions.",
                "तीन प्रकार की श्रद्धा जो तीन गुणों से संबंधित हैं और उनकी अभिव्यक्तियाँ।",
            ),
            key_teachings: teachings(
                &[
                    "Faith is inherent in all beings according to their nature",
                    "Three types of faith correspond to three gunas",
                    "Food in goodness promotes health and happiness",
                    "True austerity includes control of body, speech, and mind",
                    "Charity should be given to the right person at the right time",
                ],
                &[
                    "श्रद्धा सभी प्राणियों में उनकी प्रकृति के अनुसार निहित है",
                    "तीन प्रकार की श्रद्धा तीन गुणों से संबंधित है",
                    "सात्विक भोजन स्वास्थ्य और सुख को बढ़ावा देता है",
                    "सच्ची तपस्या में शरीर, वाणी और मन का नियंत्रण शामिल है",
                    "दान सही व्यक्ति को सही समय पर दिया जाना चाहिए",
                ],
            ),
            youtube_video_id: Some("YlNzEqobMgc".into()),
            shlokas: vec![],
        },
        Chapter {
            number: 18,
            name_hindi: "मोक्ष संन्यास योग".into(),
            name_english: "Moksha Sanyasa Yoga".into(),
            name_sanskrit: "मोक्षसंन्यासयोगः".into(),
            subtitle: "The Yoga of Liberation".into(),
            verses: 78,
            theme: "Ultimate liberation".into(),
            description: text(
                "The culmination of all teachings, the path to final liberation, and complete surrender.",
                "सभी शिक्षाओं की परिणति, अंतिम मुक्ति का मार्ग, और पूर्ण समर्पण।",
            ),
            key_teachings: teachings(
                &[
                    "Renunciation means giving up attachment, not action itself",
                    "All actions should be performed as duty without desire",
                    "Understanding the three types of knowledge, action, and doer",
                    "Complete surrender to God is the ultimate teaching",
                    "Faith in scriptures and the teacher leads to liberation",
                ],
                &[
                    "संन्यास का अर्थ है आसक्ति का त्याग, न कि कर्म का",
                    "सभी कर्म कर्तव्य के रूप में इच्छा के बिना किए जाने चाहिए",
                    "तीन प्रकार के ज्ञान, कर्म और कर्ता को समझना",
                    "भगवान के प्रति पूर्ण समर्पण अंतिम शिक्षा है",
                    "शास्त्रों और गुरु में विश्वास मुक्ति की ओर ले जाता है",
                ],
            ),
            youtube_video_id: Some("a0BV0SuOHWY".into()),
            shlokas: vec![],
        },
    ]
}

pub fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            id: 1,
            title: "Krishna and Arjuna".into(),
            title_hindi: "कृष्ण और अर्जुन".into(),
            description: "The divine conversation on the battlefield".into(),
            url: "https://images.unsplash.com/photo-1604608672516-f1b6087d3833?w=800".into(),
        },
        GalleryImage {
            id: 2,
            title: "Om Symbol".into(),
            title_hindi: "ॐ प्रतीक".into(),
            description: "The sacred symbol of divine consciousness".into(),
            url: "https://images.unsplash.com/photo-1545239351-ef35f43d514b?w=800".into(),
        },
        GalleryImage {
            id: 3,
            title: "Meditation".into(),
            title_hindi: "ध्यान".into(),
            description: "The path to inner peace".into(),
            url: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800".into(),
        },
        GalleryImage {
            id: 4,
            title: "Spiritual Journey".into(),
            title_hindi: "आध्यात्मिक यात्रा".into(),
            description: "The quest for enlightenment".into(),
            url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800".into(),
        },
        GalleryImage {
            id: 5,
            title: "Temple Art".into(),
            title_hindi: "मंदिर कला".into(),
            description: "Divine architecture and spirituality".into(),
            url: "https://images.unsplash.com/photo-1609771276182-c1ca9bfa9ad4?w=800".into(),
        },
        GalleryImage {
            id: 6,
            title: "Yoga Practice".into(),
            title_hindi: "योग अभ्यास".into(),
            description: "Unity of body, mind and spirit".into(),
            url: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800".into(),
        },
    ]
}
