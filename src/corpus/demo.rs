//! Built-in demo corpus: a few months of one person's chat life, authored
//! so that searches like "bill", "id", or "trip" exercise every scoring
//! path (exact phrase, OCR text, link titles, file names, synonyms).

use chrono::{DateTime, TimeZone, Utc};

use crate::engine::SynonymTable;
use crate::models::{ChatSession, Direction, Message, MessageKind};

fn ts(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .single()
        .expect("valid demo timestamp")
}

fn incoming(id: &str, sender: &str, at: DateTime<Utc>, body: &str) -> Message {
    Message::text(id, sender, at, body, Direction::Incoming)
}

fn outgoing(id: &str, at: DateTime<Utc>, body: &str) -> Message {
    Message::text(id, "You", at, body, Direction::Outgoing)
}

/// The full demo message set, oldest first.
pub fn demo_messages() -> Vec<Message> {
    vec![
        // January: new year, gym, project kickoff.
        incoming("m1", "Mom", ts(1, 1, 0, 5), "Happy New Year! Hope 2024 is amazing for you."),
        outgoing("m2", ts(1, 1, 0, 6), "Happy New Year Mom! Wishing you good health and happiness this year."),
        incoming("m3", "Gym Buddy", ts(1, 2, 9, 0), "You coming today? Leg day."),
        outgoing("m4", ts(1, 2, 9, 5), "Yeah, be there in 20 mins. Traffic is heavy near the junction but I'm on my way. Start the warm-up without me!"),
        incoming("m5", "Teammate", ts(1, 5, 10, 0), "Project Alpha kickoff is starting in the main conference room. We need to finalize the roadmap for Q1."),
        incoming("m6", "Teammate", ts(1, 5, 14, 0), "Here is the Jira board for tracking tasks.")
            .with_link("https://jira.acmecorp.example/browse/ALPHA-1", "Project Alpha - Sprint 1 Board")
            .forwarded(),
        // January: first electricity bill, car trouble.
        incoming("m7", "Power Co.", ts(1, 6, 9, 0), "Your electricity bill for January is generated.")
            .with_kind(MessageKind::Document)
            .with_file_name("Statement_JAN24.pdf")
            .with_recognized_text("Jaipur Electricity Distribution Ltd. Billing Period: 01 Jan 2024. Due: $120."),
        outgoing("m8", ts(1, 15, 16, 30), "Car making weird noise, took a photo of the engine light. It starts rattling whenever I go above 60kmph on the highway.")
            .with_kind(MessageKind::Image)
            .with_file_name("IMG_Engine_Err.jpg")
            .with_recognized_text("Check Engine. Error Code P0300. Misfire detected."),
        incoming("m9", "Mechanic", ts(1, 16, 11, 0), "Here is the estimate for repairs.")
            .with_kind(MessageKind::Document)
            .with_file_name("Repair_Est_Toyota.pdf")
            .with_recognized_text("Joe's Auto Shop. Spark plug replacement. Total: $450."),
        // February: the Aadhaar scenario.
        incoming("m10", "Mom", ts(2, 14, 19, 0), "Dad needs you to update your nominee details in the bank account. He visited the branch today and they said KYC is pending."),
        incoming("m11", "Mom", ts(2, 14, 19, 30), "Save this ID, you'll need it for KYC and tax.")
            .with_kind(MessageKind::Image)
            .with_file_name("IMG_20240214_193022.jpg")
            .with_recognized_text("GOVERNMENT OF INDIA. UNIQUE IDENTIFICATION AUTHORITY OF INDIA. Year of Birth: 1965. Male. Aadhaar.")
            .forwarded(),
        outgoing("m12", ts(2, 14, 19, 31), "Got it, I've saved the ID image to my secure folder. I'll log into the netbanking portal tonight and complete the KYC process."),
        // February: the API scenario, second bill, food.
        incoming("m13", "Teammate", ts(2, 15, 10, 0), "Hey, are you free to look at the integration guide? I'm stuck on the authentication flow."),
        incoming("m14", "Teammate", ts(2, 15, 10, 1), "Use this for integration with the new payments flow.")
            .with_link("https://docs.acmecorp.example/developer/payments-v2/overview.html", "Acme Payments v2 - Developer Guide"),
        incoming("m15", "Power Co.", ts(2, 5, 9, 0), "Your bill for Feb is ready.")
            .with_kind(MessageKind::Document)
            .with_file_name("Statement_FEB24.pdf")
            .with_recognized_text("Jaipur Electricity Distribution Ltd. Billing Period: 01 Feb 2024."),
        incoming("m16", "Mom", ts(2, 20, 18, 0), "I made your favorite today!")
            .with_kind(MessageKind::Image)
            .with_file_name("IMG_Curry.jpg")
            .with_recognized_text("Spicy Chicken Curry. Ingredients: Cumin, Coriander, Chili."),
        outgoing("m17", ts(2, 20, 18, 5), "Looks delicious! Send me the recipe text later, I want to try cooking it this weekend."),
        // March: vacation planning.
        outgoing("m18", ts(3, 1, 20, 0), "I need a break. Thinking of going to Goa for a long weekend. Need some beach time."),
        incoming("m19", "Friend", ts(3, 1, 20, 10), "Check this hotel, it's on sale right now.")
            .with_link("https://booking.example/hotel/goa-resort", "Sunny Beach Resort & Spa - 50% Off"),
        outgoing("m20", ts(3, 2, 9, 0), "Booked the flights! We leave on Friday evening."),
        incoming("m21", "Airline", ts(3, 2, 9, 5), "Your E-Ticket is attached.")
            .with_kind(MessageKind::Document)
            .with_file_name("Ticket_BLR_GOI.pdf")
            .with_recognized_text("Indigo Airlines. Flight 6E-453. Passenger: You. Date: 15 Mar."),
        // March: work issues, third bill, vacation photos.
        incoming("m22", "Teammate", ts(3, 3, 11, 0), "Did the API keys work?"),
        outgoing("m23", ts(3, 3, 11, 5), "Yeah but I'm getting 500 errors on the sandbox environment whenever I try to initialize the transaction with INR currency."),
        incoming("m24", "Teammate", ts(3, 3, 11, 10), "Check the server logs, might be a config issue on the backend."),
        incoming("m25", "Power Co.", ts(3, 5, 9, 0), "Your bill for March is ready.")
            .with_kind(MessageKind::Document)
            .with_file_name("Statement_0394827_MAR24.pdf")
            .with_recognized_text("Jaipur Electricity Distribution Ltd. Billing Period: 01 Mar 2024 - 31 Mar 2024. Amount Due: 4500 INR."),
        outgoing("m26", ts(3, 16, 14, 22), "")
            .with_kind(MessageKind::Image)
            .with_file_name("PXL_Beach.jpg")
            .with_recognized_text("Sunset beach vacation vibes. Sand and Sea."),
        outgoing("m27", ts(3, 16, 18, 30), "Dinner time.")
            .with_kind(MessageKind::Image)
            .with_file_name("PXL_Seafood.jpg")
            .with_recognized_text("Lobster Grill Restaurant Menu."),
        // Late March: more finance and identity traffic.
        incoming("m28", "Internet Co", ts(3, 22, 10, 0), "Your monthly fiber subscription is due tomorrow."),
        outgoing("m29", ts(3, 22, 10, 5), "Remind me to recharge the wifi before it gets disconnected."),
        incoming("m30", "Broker", ts(3, 23, 9, 0), "Here is the rent agreement draft.")
            .with_kind(MessageKind::Document)
            .with_file_name("Rent_Agreement_2024.pdf")
            .with_recognized_text("Tenancy Contract. Monthly Rent: 20,000 INR."),
        outgoing("m31", ts(3, 23, 9, 30), "Scan of my driving license. I need this for the rental agreement verification later today. Please print it out and keep it on my desk, I'm running late from the client meeting.")
            .with_kind(MessageKind::Image)
            .with_file_name("DL_Scan_Front.jpg")
            .with_recognized_text("Driving License. Union of India. Valid till 2030."),
        incoming("m32", "Mom", ts(3, 24, 14, 0), "Did you pay the water tax? It's due this week."),
        // Latest few days.
        outgoing("m33", ts(3, 25, 16, 45), "Where is that document mom sent? I can't find it in the group."),
        incoming("m34", "System", ts(3, 25, 8, 0), "This message was deleted."),
        incoming("m35", "Friend", ts(3, 25, 9, 0), "Movie tonight?"),
        outgoing("m36", ts(3, 25, 9, 5), "Can't, finishing the sprint. We have a hard deadline tomorrow and the QA team just found a critical bug in the checkout flow. Gonna be a late night."),
        incoming("m37", "Mom", ts(3, 26, 8, 0), "Call me when free."),
        outgoing("m38", ts(3, 26, 8, 30), "Will do."),
    ]
}

/// The authored synonym table powering the "fake semantic" search. Entries
/// are deliberately asymmetric and are consulted exactly as written.
pub fn default_synonyms() -> SynonymTable {
    let mut table = SynonymTable::new();

    // Identity and documents, including common misspellings.
    table.insert("aadhaar", ["id", "kyc", "identification", "uidai", "govt", "document", "card", "license", "adhar", "aadhar", "adhaar"]);
    table.insert("adhar", ["aadhaar", "id", "card"]);
    table.insert("adhaar", ["aadhaar", "id", "card"]);
    table.insert("aadhar", ["aadhaar", "id", "card"]);
    table.insert("id", ["aadhaar", "pan", "passport", "card", "identification", "kyc", "license"]);
    table.insert("passport", ["id", "travel", "document"]);
    table.insert("license", ["id", "driving", "scan", "document"]);

    // Tech and work.
    table.insert("api", ["integration", "developer", "webhook", "docs", "guide", "json", "endpoint"]);
    table.insert("code", ["api", "java", "script", "error", "bug", "jira", "sprint"]);
    table.insert("work", ["project", "alpha", "jira", "sprint", "meeting", "office", "server"]);
    table.insert("error", ["bug", "fail", "crash", "p0300", "500", "logs"]);

    // Finance. "payment" is kept out of the "bill" entry so that queries
    // for bills do not drag in the Payments API guide.
    table.insert("bill", ["invoice", "statement", "electricity", "light", "due", "cost", "amount", "receipt", "recharge", "subscription", "rent", "tax", "unpaid"]);
    table.insert("unpaid", ["bill", "due", "cost"]);
    table.insert("due", ["bill", "unpaid"]);
    table.insert("receipt", ["bill", "invoice", "statement", "proof", "transaction", "cost"]);
    table.insert("electricity", ["bill", "power", "light", "jaipur", "current"]);
    table.insert("invoice", ["bill", "receipt", "estimate", "cost"]);

    // Travel.
    table.insert("trip", ["vacation", "flight", "booking", "hotel", "beach", "goa", "ticket", "travel"]);
    table.insert("travel", ["trip", "flight", "ticket", "booking", "hotel"]);
    table.insert("flight", ["indigo", "airline", "ticket", "plane", "travel"]);
    table.insert("ticket", ["flight", "travel", "booking", "indigo"]);

    // Food.
    table.insert("food", ["dinner", "lunch", "recipe", "curry", "chicken", "menu", "restaurant", "hungry"]);
    table.insert("recipe", ["food", "cook", "ingredients"]);

    // Car.
    table.insert("car", ["engine", "mechanic", "repair", "toyota", "driving", "vehicle"]);
    table.insert("repair", ["mechanic", "fix", "broken", "cost", "estimate"]);

    table
}

/// Demo chat list: the self-chat holds everything; the others are carved
/// out of the same message set per sender.
pub fn demo_chats() -> Vec<ChatSession> {
    let messages = demo_messages();

    let with_sender = |sender: &str, also_outgoing: &dyn Fn(&Message) -> bool| -> Vec<Message> {
        messages
            .iter()
            .filter(|m| m.sender == sender || (m.sender == "You" && also_outgoing(m)))
            .cloned()
            .collect()
    };

    vec![
        ChatSession::new("chat_you", "Alice (You)", messages.clone())
            .with_status("Message yourself"),
        ChatSession::new(
            "chat_mom",
            "Mom",
            with_sender("Mom", &|m| {
                m.body.contains("Mom") || m.body.contains("pay") || m.body.contains("saved")
            }),
        )
        .with_status("Love you")
        .with_unread(2),
        ChatSession::new(
            "chat_team",
            "Teammate",
            with_sender("Teammate", &|m| m.body.contains("API") || m.body.contains("sprint")),
        )
        .with_status("At work"),
        ChatSession::new(
            "chat_power",
            "Power Co.",
            with_sender("Power Co.", &|m| m.body.contains("pay")),
        )
        .with_status("Official Business Account"),
        ChatSession::new("chat_gym", "Gym Buddy", with_sender("Gym Buddy", &|m| m.body.contains("20")))
            .with_status("Gym rat"),
    ]
}
