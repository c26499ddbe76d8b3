//! The compiled-in supplication table.

use crate::domain::{SupplicationRecord, Translation, Translations};

pub static SUPPLICATIONS: &[SupplicationRecord] = &[
    SupplicationRecord {
        id: 1,
        arabic: "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ",
        transliteration: "Asbahna wa asbahal mulku lillah, walhamdu lillah",
        translations: Translations {
            bengali: Translation {
                title: "সকালের দোয়া",
                category: "সকাল",
                body: "আমরা সকালে উপনীত হয়েছি এবং এই সময়ে সমস্ত সার্বভৌমত্ব আল্লাহর। সমস্ত প্রশংসা আল্লাহর জন্য।",
            },
            english: Translation {
                title: "Morning Dua",
                category: "Morning",
                body: "We have reached the morning and at this very time all sovereignty belongs to Allah. All praise is due to Allah.",
            },
            hindi: Translation {
                title: "सुबह की दुआ",
                category: "सुबह",
                body: "हम सुबह को पहुँचे और इस समय सारी बादशाहत अल्लाह की है। सारी तारीफ अल्लाह के लिए है।",
            },
            urdu: Translation {
                title: "صبح کی دعا",
                category: "صبح",
                body: "ہم نے صبح کی اور اس وقت ساری بادشاہت اللہ کی ہے۔ تمام تعریفیں اللہ کے لیے ہیں۔",
            },
        },
    },
    SupplicationRecord {
        id: 2,
        arabic: "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ",
        transliteration: "Amsayna wa amsal mulku lillah, walhamdu lillah",
        translations: Translations {
            bengali: Translation {
                title: "সন্ধ্যার দোয়া",
                category: "সন্ধ্যা",
                body: "আমরা সন্ধ্যায় উপনীত হয়েছি এবং এই সময়ে সমস্ত সার্বভৌমত্ব আল্লাহর। সমস্ত প্রশংসা আল্লাহর জন্য।",
            },
            english: Translation {
                title: "Evening Dua",
                category: "Evening",
                body: "We have reached the evening and at this very time all sovereignty belongs to Allah. All praise is due to Allah.",
            },
            hindi: Translation {
                title: "शाम की दुआ",
                category: "शाम",
                body: "हम शाम को पहुँचे और इस समय सारी बादशाहत अल्लाह की है। सारी तारीफ अल्लाह के लिए है।",
            },
            urdu: Translation {
                title: "شام کی دعا",
                category: "شام",
                body: "ہم نے شام کی اور اس وقت ساری بادشاہت اللہ کی ہے۔ تمام تعریفیں اللہ کے لیے ہیں۔",
            },
        },
    },
    SupplicationRecord {
        id: 3,
        arabic: "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
        transliteration: "Bismika Allahumma amutu wa ahya",
        translations: Translations {
            bengali: Translation {
                title: "ঘুমানোর আগে দোয়া",
                category: "ঘুম",
                body: "হে আল্লাহ, তোমার নামে আমি মৃত্যুবরণ করি এবং জীবিত হই।",
            },
            english: Translation {
                title: "Dua Before Sleeping",
                category: "Sleep",
                body: "In Your name O Allah, I live and die.",
            },
            hindi: Translation {
                title: "सोने से पहले की दुआ",
                category: "नींद",
                body: "हे अल्लाह, तेरे नाम पर मैं मरता हूँ और जीता हूँ।",
            },
            urdu: Translation {
                title: "سونے سے پہلے کی دعا",
                category: "نیند",
                body: "اے اللہ، تیرے نام پر میں مرتا ہوں اور جیتا ہوں۔",
            },
        },
    },
    SupplicationRecord {
        id: 4,
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَحْيَانَا بَعْدَ مَا أَمَاتَنَا وَإِلَيْهِ النُّشُورُ",
        transliteration: "Alhamdu lillahil-ladhi ahyana ba'da ma amatana wa ilayhin-nushur",
        translations: Translations {
            bengali: Translation {
                title: "ঘুম থেকে জাগার দোয়া",
                category: "জাগরণ",
                body: "সমস্ত প্রশংসা আল্লাহর যিনি আমাদের মৃত্যুর পর জীবিত করেছেন এবং তাঁর কাছেই পুনরুত্থান।",
            },
            english: Translation {
                title: "Dua Upon Waking",
                category: "Waking Up",
                body: "All praise is for Allah who gave us life after having taken it from us and unto Him is the resurrection.",
            },
            hindi: Translation {
                title: "जागने पर की दुआ",
                category: "जागना",
                body: "सारी तारीफ अल्लाह के लिए है जिसने हमें मौत के बाद ज़िंदा किया और उसी की तरफ़ लौटना है।",
            },
            urdu: Translation {
                title: "جاگنے کی دعا",
                category: "جاگنا",
                body: "تمام تعریفیں اللہ کے لیے ہیں جس نے ہمیں موت کے بعد زندہ کیا اور اسی کی طرف لوٹنا ہے۔",
            },
        },
    },
    SupplicationRecord {
        id: 5,
        arabic: "بِسْمِ اللَّهِ وَعَلَى بَرَكَةِ اللَّهِ",
        transliteration: "Bismillahi wa 'ala barakatillah",
        translations: Translations {
            bengali: Translation {
                title: "খাওয়ার আগে দোয়া",
                category: "খাবার",
                body: "আল্লাহর নামে এবং আল্লাহর বরকতে।",
            },
            english: Translation {
                title: "Dua Before Eating",
                category: "Food",
                body: "In the name of Allah and with the blessings of Allah.",
            },
            hindi: Translation {
                title: "खाने से पहले की दुआ",
                category: "खाना",
                body: "अल्लाह के नाम पर और अल्लाह की बरकत से।",
            },
            urdu: Translation {
                title: "کھانے سے پہلے کی دعا",
                category: "کھانا",
                body: "اللہ کے نام سے اور اللہ کی برکت سے۔",
            },
        },
    },
    SupplicationRecord {
        id: 6,
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَطْعَمَنَا وَسَقَانَا وَجَعَلَنَا مُسْلِمِينَ",
        transliteration: "Alhamdu lillahil-ladhi at'amana wa saqana wa ja'alana muslimin",
        translations: Translations {
            bengali: Translation {
                title: "খাওয়ার পরে দোয়া",
                category: "খাবার",
                body: "সমস্ত প্রশংসা আল্লাহর যিনি আমাদের খাওয়ালেন, পান করালেন এবং মুসলিম বানালেন।",
            },
            english: Translation {
                title: "Dua After Eating",
                category: "Food",
                body: "All praise is for Allah who fed us, gave us drink and made us Muslims.",
            },
            hindi: Translation {
                title: "खाने के बाद की दुआ",
                category: "खाना",
                body: "सारी तारीफ अल्लाह के लिए है जिसने हमें खिलाया, पिलाया और मुसलमान बनाया।",
            },
            urdu: Translation {
                title: "کھانے کے بعد کی دعا",
                category: "کھانا",
                body: "تمام تعریفیں اللہ کے لیے ہیں جس نے ہمیں کھلایا، پلایا اور مسلمان بنایا۔",
            },
        },
    },
    SupplicationRecord {
        id: 7,
        arabic: "بِسْمِ اللَّهِ وَلَجْنَا، وَبِسْمِ اللَّهِ خَرَجْنَا، وَعَلَى اللَّهِ رَبِّنَا تَوَكَّلْنَا",
        transliteration: "Bismillahi walajna, wa bismillahi kharajna, wa 'ala Allahi rabbina tawakkalna",
        translations: Translations {
            bengali: Translation {
                title: "বাড়িতে প্রবেশের দোয়া",
                category: "বাড়ি",
                body: "আল্লাহর নামে আমরা প্রবেশ করি এবং আল্লাহর নামে বের হই, এবং আমাদের রবের উপর ভরসা করি।",
            },
            english: Translation {
                title: "Dua When Entering Home",
                category: "Home",
                body: "In the name of Allah we enter and in the name of Allah we leave, and upon our Lord we place our trust.",
            },
            hindi: Translation {
                title: "घर में दाखिल होने की दुआ",
                category: "घर",
                body: "अल्लाह के नाम से हम दाखिल होते हैं और अल्लाह के नाम से निकलते हैं, और अपने रब पर भरोसा करते हैं।",
            },
            urdu: Translation {
                title: "گھر میں داخل ہونے کی دعا",
                category: "گھر",
                body: "اللہ کے نام سے ہم داخل ہوتے ہیں اور اللہ کے نام سے نکلتے ہیں، اور اپنے رب پر بھروسہ کرتے ہیں۔",
            },
        },
    },
    SupplicationRecord {
        id: 8,
        arabic: "بِسْمِ اللَّهِ تَوَكَّلْتُ عَلَى اللَّهِ، لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللَّهِ",
        transliteration: "Bismillahi tawakkaltu 'alallah, la hawla wa la quwwata illa billah",
        translations: Translations {
            bengali: Translation {
                title: "বাড়ি থেকে বের হওয়ার দোয়া",
                category: "বাড়ি",
                body: "আল্লাহর নামে, আমি আল্লাহর উপর ভরসা করি, আল্লাহ ছাড়া কোনো শক্তি ও ক্ষমতা নেই।",
            },
            english: Translation {
                title: "Dua When Leaving Home",
                category: "Home",
                body: "In the name of Allah, I place my trust in Allah, and there is no might nor power except with Allah.",
            },
            hindi: Translation {
                title: "घर से निकलने की दुआ",
                category: "घर",
                body: "अल्लाह के नाम पर, मैं अल्लाह पर भरोसा करता हूँ, अल्लाह के सिवा कोई ताकत और शक्ति नहीं।",
            },
            urdu: Translation {
                title: "گھر سے نکلنے کی دعا",
                category: "گھر",
                body: "اللہ کے نام پر، میں اللہ پر بھروسہ کرتا ہوں، اللہ کے سوا کوئی طاقت اور قوت نہیں۔",
            },
        },
    },
    SupplicationRecord {
        id: 9,
        arabic: "اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ الْحَيُّ الْقَيُّومُ",
        transliteration: "Allahu la ilaha illa huwal hayyul qayyum",
        translations: Translations {
            bengali: Translation {
                title: "আয়াতুল কুরসি",
                category: "সুরক্ষা",
                body: "আল্লাহ - তিনি ছাড়া কোনো উপাস্য নেই, তিনি চিরঞ্জীব, সবকিছুর ধারক।",
            },
            english: Translation {
                title: "Ayatul Kursi",
                category: "Protection",
                body: "Allah - there is no deity except Him, the Ever-Living, the Sustainer of existence.",
            },
            hindi: Translation {
                title: "आयतुल कुर्सी",
                category: "सुरक्षा",
                body: "अल्लाह - उसके सिवा कोई माबूद नहीं, वह हमेशा जीने वाला, सब का सहारा है।",
            },
            urdu: Translation {
                title: "آیۃ الکرسی",
                category: "حفاظت",
                body: "اللہ - اس کے سوا کوئی معبود نہیں، وہ ہمیشہ زندہ رہنے والا، سب کا سہارا ہے۔",
            },
        },
    },
    SupplicationRecord {
        id: 10,
        arabic: "رَبَّنَا ظَلَمْنَا أَنفُسَنَا وَإِن لَّمْ تَغْفِرْ لَنَا وَتَرْحَمْنَا لَنَكُونَنَّ مِنَ الْخَاسِرِينَ",
        transliteration: "Rabbana zalamna anfusana wa illam taghfir lana wa tarhamna lanakunanna minal khasireen",
        translations: Translations {
            bengali: Translation {
                title: "ক্ষমা প্রার্থনার দোয়া",
                category: "ক্ষমা",
                body: "হে আমাদের রব, আমরা নিজেদের উপর জুলুম করেছি, যদি তুমি আমাদের ক্ষমা না কর এবং রহম না কর, তাহলে আমরা ক্ষতিগ্রস্তদের অন্তর্ভুক্ত হব।",
            },
            english: Translation {
                title: "Seeking Forgiveness",
                category: "Forgiveness",
                body: "Our Lord, we have wronged ourselves, and if You do not forgive us and have mercy upon us, we will surely be among the losers.",
            },
            hindi: Translation {
                title: "माफ़ी की दुआ",
                category: "माफ़ी",
                body: "हे हमारे रब, हमने अपने ऊपर ज़ुल्म किया, अगर तू हमें माफ़ न करे और रहम न करे, तो हम नुक़सान उठाने वालों में होंगे।",
            },
            urdu: Translation {
                title: "معافی کی دعا",
                category: "معافی",
                body: "اے ہمارے رب، ہم نے اپنے اوپر ظلم کیا، اگر تو ہمیں معاف نہ کرے اور رحم نہ کرے، تو ہم نقصان اٹھانے والوں میں ہوں گے۔",
            },
        },
    },
];
