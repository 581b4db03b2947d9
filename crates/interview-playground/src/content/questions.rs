use super::domain::{
    ApproachExample, ApproachKind, Audience, Difficulty, LinkRef, PlaygroundQuestion,
    QuestionCategory,
};

/// Ordered question table reviewed in the playground.
#[derive(Debug, Clone)]
pub struct QuestionLibrary {
    questions: Vec<PlaygroundQuestion>,
}

impl QuestionLibrary {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_questions(questions: Vec<PlaygroundQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[PlaygroundQuestion] {
        &self.questions
    }

    pub fn find(&self, id: &str) -> Option<&PlaygroundQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn for_category(&self, category: QuestionCategory) -> Vec<&PlaygroundQuestion> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }
}

fn approach(
    kind: ApproachKind,
    title: &str,
    description: &str,
    explanation: &str,
    impact: &str,
) -> ApproachExample {
    ApproachExample {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        code: None,
        explanation: explanation.to_string(),
        impact: impact.to_string(),
    }
}

fn good(title: &str, description: &str, explanation: &str, impact: &str) -> ApproachExample {
    approach(ApproachKind::Good, title, description, explanation, impact)
}

fn bad(title: &str, description: &str, explanation: &str, impact: &str) -> ApproachExample {
    approach(ApproachKind::Bad, title, description, explanation, impact)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn link(title: &str, url: &str) -> LinkRef {
    LinkRef {
        title: title.to_string(),
        url: url.to_string(),
    }
}

fn standard_questions() -> Vec<PlaygroundQuestion> {
    vec![
        PlaygroundQuestion {
            id: "q1-candidate-coding".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Beginner,
            title: "Using AI for Algorithm Problems".to_string(),
            scenario: "You need to implement a function to reverse a linked list".to_string(),
            context: "You're in an interview where AI tools are allowed. You ask ChatGPT for help."
                .to_string(),
            ai_prompt: Some("Write a function to reverse a linked list in Python".to_string()),
            ai_response: Some(
                "def reverse_linked_list(head):\n    prev = None\n    current = head\n    while current:\n        next_node = current.next\n        current.next = prev\n        prev = current\n        current = next_node\n    return prev"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Explain Before Implementing",
                    "Start by explaining your approach to the interviewer",
                    "\"I'll use a three-pointer approach: prev, current, and next. We'll iterate through the list, reversing the pointers as we go. Time complexity is O(n), space is O(1).\"",
                    "Shows you understand the problem and can articulate your thinking",
                ),
                good(
                    "Review AI Code Critically",
                    "After getting AI response, walk through the code line by line",
                    "\"The AI solution looks correct. Let me trace through it: we maintain prev as None initially, iterate through with current, save next_node to avoid losing reference, reverse the pointer, then move forward.\"",
                    "Demonstrates code comprehension and debugging skills",
                ),
                good(
                    "Test with Examples",
                    "Propose test cases and mentally trace execution",
                    "\"Let me test with [1→2→3]. After iteration 1: None←1 2→3. After iteration 2: None←1←2 3. After iteration 3: None←1←2←3. Returns 3, which is correct.\"",
                    "Shows systematic testing approach and attention to correctness",
                ),
                good(
                    "Discuss Edge Cases",
                    "Identify and handle edge cases without prompting",
                    "\"We should handle empty list (None), single node (return head), and two nodes. The current solution handles all these correctly.\"",
                    "Demonstrates thoroughness and production-ready thinking",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Copy-Paste Without Understanding",
                    "Immediately copy AI code without explanation",
                    "[Candidate pastes code] \"Here's the solution. It reverses the linked list.\"",
                    "Interviewer cannot assess your problem-solving ability or understanding",
                ),
                bad(
                    "Cannot Explain How It Works",
                    "Unable to walk through the code logic",
                    "Interviewer: \"Can you explain how this works?\" Candidate: \"Um... it uses pointers to reverse the list...\"",
                    "Major red flag - suggests you don't understand the solution",
                ),
                bad(
                    "Skip Testing Entirely",
                    "Assume AI code is correct without verification",
                    "\"The AI generated this, so it should work. Let's move on.\"",
                    "Shows lack of rigor and quality mindset",
                ),
                bad(
                    "No Edge Case Consideration",
                    "Don't think about null, empty, or special cases",
                    "[Submits code without discussing what happens with None or single node]",
                    "Misses critical bugs that would appear in production",
                ),
            ],
            key_takeaways: lines(&[
                "AI is a tool to augment your thinking, not replace it",
                "Always explain your approach before and after using AI",
                "Treat AI code like code from a junior developer - review it carefully",
                "Test systematically and consider edge cases",
                "Interviewers want to see your judgment, not just AI output",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q2-interviewer-assessment".to_string(),
            role: Audience::Interviewer,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Intermediate,
            title: "Evaluating AI-Assisted Solutions".to_string(),
            scenario: "Candidate quickly generates a working solution using Copilot".to_string(),
            context: "You need to assess their actual coding ability when AI did the heavy lifting."
                .to_string(),
            ai_prompt: None,
            ai_response: None,
            good_approaches: vec![
                good(
                    "Ask About the Approach",
                    "Focus on problem-solving process, not syntax",
                    "\"Before you used Copilot, what approach did you have in mind? Why did you choose this data structure?\"",
                    "Reveals whether they can think through problems independently",
                ),
                good(
                    "Test Understanding with Modifications",
                    "Ask them to modify the solution",
                    "\"What if the input was a stream instead of an array? How would you adapt this code?\"",
                    "Shows if they understand the code well enough to modify it",
                ),
                good(
                    "Probe Complexity Analysis",
                    "Ask for time/space complexity with justification",
                    "\"What's the time complexity and how did you determine that? Could we optimize further?\"",
                    "Tests algorithmic thinking beyond code generation",
                ),
                good(
                    "Discuss Trade-offs",
                    "Explore alternative approaches and their pros/cons",
                    "\"Could we use a different approach? What would be the trade-offs between these solutions?\"",
                    "Assesses engineering judgment and design thinking",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Focus Only on Syntax",
                    "Judge based on code style rather than thinking",
                    "\"Your variable names could be better. Let's talk about the indentation...\"",
                    "Misses the point - AI can handle syntax perfectly",
                ),
                bad(
                    "Assume AI Usage is Cheating",
                    "Get frustrated that candidate used AI tools",
                    "\"This is supposed to test YOUR coding ability, not ChatGPT's.\"",
                    "Disconnects from reality - 82% of developers use AI daily",
                ),
                bad(
                    "Accept Code at Face Value",
                    "Don't probe deeper if code looks correct",
                    "\"Looks good! Let's move to the next question.\"",
                    "Fails to assess actual understanding and problem-solving ability",
                ),
                bad(
                    "No Follow-up Questions",
                    "Don't test understanding with modifications",
                    "[Marks as \"passed\" without testing comprehension]",
                    "May hire someone who can use AI but can't debug or adapt code",
                ),
            ],
            key_takeaways: lines(&[
                "Focus on problem-solving process, not code generation",
                "Ask candidates to modify, extend, or optimize the solution",
                "Probe understanding with \"what if\" scenarios",
                "Assess judgment: Do they review AI code critically?",
                "Look for engineering thinking beyond syntax correctness",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q3-candidate-debugging".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Debugging,
            difficulty: Difficulty::Intermediate,
            title: "Debugging Production Issues with AI".to_string(),
            scenario: "API endpoints randomly returning 500 errors (5% of requests)".to_string(),
            context: "You have access to logs, metrics, and AI tools to help diagnose the issue."
                .to_string(),
            ai_prompt: Some(
                "Why would an API return 500 errors randomly for 5% of requests?".to_string(),
            ),
            ai_response: Some(
                "Common causes of intermittent 500 errors:\n1. Race conditions in concurrent code\n2. Memory leaks causing OOM errors\n3. Database connection pool exhaustion\n4. Timeout issues with downstream services\n5. Unhandled exceptions for specific input edge cases\n6. Resource contention (CPU, memory, file handles)\n7. Thread pool saturation"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Systematic Hypothesis Testing",
                    "Use AI to brainstorm, then systematically investigate",
                    "\"AI suggests 7 causes. Let me prioritize: First, I'd check error logs for stack traces. Then connection pool metrics. Then memory usage patterns over time.\"",
                    "Shows structured debugging methodology",
                ),
                good(
                    "Ask Clarifying Questions",
                    "Gather context before jumping to solutions",
                    "\"What's our connection pool size? Are errors correlated with traffic spikes? Do we have distributed tracing? What changed recently?\"",
                    "Demonstrates understanding that context matters",
                ),
                good(
                    "Propose Observability Improvements",
                    "Identify gaps in monitoring and logging",
                    "\"We need request IDs for tracing, connection pool metrics, and error rate by endpoint. Let me add structured logging for failed requests.\"",
                    "Shows proactive thinking about long-term system health",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Pick First AI Suggestion",
                    "Immediately propose AI's first hypothesis as \"the fix\"",
                    "\"AI says it's probably race conditions. Let's add locks everywhere.\"",
                    "May waste time fixing the wrong problem or create new issues",
                ),
                bad(
                    "No Validation or Testing",
                    "Propose solutions without validating hypothesis",
                    "\"Let's increase the connection pool size to 100. That should fix it.\"",
                    "Changes production without understanding root cause",
                ),
                bad(
                    "Skip Investigation Phase",
                    "Don't check logs, metrics, or recent changes",
                    "[Doesn't ask about logs, monitoring, or recent deployments]",
                    "Misses obvious clues that would lead to root cause",
                ),
            ],
            key_takeaways: lines(&[
                "Use AI for brainstorming, not as a diagnostic oracle",
                "Always gather data before proposing solutions",
                "Think systematically: logs → metrics → traces → code",
                "Validate hypotheses before implementing fixes",
                "Consider observability: Can we detect this faster next time?",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q4-both-communication".to_string(),
            role: Audience::Both,
            category: QuestionCategory::Communication,
            difficulty: Difficulty::Beginner,
            title: "Communicating AI Usage in Interviews".to_string(),
            scenario: "How to talk about using AI tools during interviews".to_string(),
            context: "Both candidates and interviewers need clear communication about AI usage."
                .to_string(),
            ai_prompt: None,
            ai_response: None,
            good_approaches: vec![
                good(
                    "Candidate: Ask Permission Explicitly",
                    "Clarify AI usage policy upfront",
                    "\"Is it okay if I use GitHub Copilot and ChatGPT during this interview? I typically use them in my daily work.\"",
                    "Shows professionalism and avoids misunderstandings",
                ),
                good(
                    "Candidate: Narrate Your Process",
                    "Think out loud when using AI",
                    "\"I'm going to ask ChatGPT about the standard approach for this problem, then we'll review it together and optimize.\"",
                    "Makes your thought process visible to interviewer",
                ),
                good(
                    "Interviewer: State Policy Clearly",
                    "Be explicit about what AI tools are allowed",
                    "\"You're welcome to use AI tools like Copilot or ChatGPT. I'm more interested in how you think through problems and evaluate solutions.\"",
                    "Reduces candidate anxiety and sets clear expectations",
                ),
                good(
                    "Interviewer: Focus on Judgment",
                    "Evaluate HOW they use AI, not WHETHER they use it",
                    "\"I noticed you reviewed the AI code and found an edge case bug. That's exactly the kind of critical thinking we value.\"",
                    "Rewards good engineering practices",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Candidate: Use AI Secretly",
                    "Try to hide that you're using AI tools",
                    "[Minimizes ChatGPT window when screen sharing, pretends to type code from memory]",
                    "If caught, looks dishonest. If not caught, creates ethical issues",
                ),
                bad(
                    "Candidate: No Explanation",
                    "Use AI silently without narrating",
                    "[Long pause, then suddenly code appears without explanation]",
                    "Interviewer can't assess your thinking process",
                ),
                bad(
                    "Interviewer: Ambiguous Policy",
                    "Don't clarify if AI is allowed",
                    "[Says nothing about AI tools, candidate is unsure what's acceptable]",
                    "Candidate may avoid helpful tools out of caution, or use them and worry",
                ),
                bad(
                    "Interviewer: Ban AI Completely",
                    "Prohibit AI tools in interview",
                    "\"No AI tools allowed. This tests your coding ability, not ChatGPT's.\"",
                    "Tests unrealistic scenario - developers use AI 82% of the time in real work",
                ),
            ],
            key_takeaways: lines(&[
                "Be explicit about AI usage - both sides should communicate clearly",
                "Candidates: Ask permission and narrate your AI usage",
                "Interviewers: State policy upfront and focus on judgment, not just output",
                "Treat AI tools like Stack Overflow - using them is normal, but understanding matters",
                "Good communication about AI builds trust and reduces anxiety",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q5-candidate-ethics".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Ethics,
            difficulty: Difficulty::Advanced,
            title: "Security and Ethical Considerations".to_string(),
            scenario: "AI suggests code with potential security vulnerabilities".to_string(),
            context: "You asked AI to generate authentication code, but it has concerning patterns."
                .to_string(),
            ai_prompt: None,
            ai_response: Some(
                "def authenticate_user(username, password):\n    user = db.query(\"SELECT * FROM users WHERE username='\" + username + \"'\")\n    if user and user.password == password:\n        return create_session(user)\n    return None"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Identify Security Issues",
                    "Spot SQL injection and plaintext password comparison",
                    "\"This code has two critical issues: SQL injection vulnerability from string concatenation, and plaintext password comparison instead of hashed passwords.\"",
                    "Shows security awareness and critical thinking",
                ),
                good(
                    "Propose Secure Alternatives",
                    "Suggest parameterized queries and bcrypt",
                    "\"We should use parameterized queries to prevent SQL injection, and bcrypt.checkpw() to compare against hashed passwords stored in the database.\"",
                    "Demonstrates knowledge of secure coding practices",
                ),
                good(
                    "Ask About Security Requirements",
                    "Discuss MFA, rate limiting, session management",
                    "\"Should we implement rate limiting to prevent brute force? What about MFA? How long should sessions last?\"",
                    "Thinks holistically about authentication security",
                ),
                good(
                    "Reference Security Standards",
                    "Mention OWASP, industry best practices",
                    "\"According to OWASP guidelines, we should also implement account lockout after failed attempts and use secure session tokens.\"",
                    "Shows you stay current with security standards",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Accept AI Code As-Is",
                    "Don't review for security vulnerabilities",
                    "\"AI generated this authentication code. Should work fine.\"",
                    "Critical security vulnerabilities make it to production",
                ),
                bad(
                    "Trust AI for Security",
                    "Assume AI writes secure code",
                    "\"I used ChatGPT so the security should be good.\"",
                    "Research shows AI users write LESS secure code but think it's MORE secure (Stanford study)",
                ),
                bad(
                    "No Security Considerations",
                    "Focus only on functionality, ignore security",
                    "[Tests if login works, doesn't check for injection, password handling, or session security]",
                    "Creates major security debt and potential breaches",
                ),
            ],
            key_takeaways: lines(&[
                "NEVER trust AI-generated security code without thorough review",
                "Common AI mistakes: SQL injection, XSS, insecure deserialization, plaintext secrets",
                "Always review for OWASP Top 10 vulnerabilities",
                "Stanford research: AI users write less secure code but are overconfident",
                "Security is one area where AI assistance requires EXTRA scrutiny, not less",
            ]),
            resources: vec![
                link(
                    "OWASP Top 10",
                    "https://owasp.org/www-project-top-ten/",
                ),
                link(
                    "Stanford Study on AI and Security",
                    "https://arxiv.org/abs/2211.03622",
                ),
            ],
        },
        PlaygroundQuestion {
            id: "q6-candidate-data-structures".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Intermediate,
            title: "Choosing the Right Data Structure".to_string(),
            scenario: "You need to implement a cache with O(1) lookup and eviction".to_string(),
            context: "Interview question: Design an LRU (Least Recently Used) cache with get() and put() operations."
                .to_string(),
            ai_prompt: Some(
                "How do I implement an LRU cache in Python with O(1) operations?".to_string(),
            ),
            ai_response: Some(
                "Use a combination of:\n1. HashMap (dict) for O(1) lookup\n2. Doubly linked list for O(1) removal/addition\n3. Track head (most recent) and tail (least recent)"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Explain Data Structure Choice",
                    "Articulate why you need both HashMap and Doubly Linked List",
                    "\"We need O(1) lookup, so HashMap is essential. But we also need O(1) removal from middle when updating order, so a doubly linked list works perfectly. Single linked list would be O(n) for removal.\"",
                    "Shows you understand time complexity trade-offs and can justify design decisions",
                ),
                good(
                    "Identify Edge Cases First",
                    "List edge cases before implementing",
                    "\"Before coding, let me think: What if capacity is 0? What if we put() an existing key? What if we get() a non-existent key? Should get() update recency?\"",
                    "Demonstrates systematic thinking and prevents bugs upfront",
                ),
                good(
                    "Start with API Contract",
                    "Define the interface clearly",
                    "\"Let me define the class: LRUCache(capacity). Methods: get(key) returns value or -1. put(key, value) inserts or updates and evicts if over capacity.\"",
                    "Shows you think about API design and user expectations",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Just Use OrderedDict",
                    "Suggest Python's OrderedDict without understanding internals",
                    "\"I'll just use OrderedDict with move_to_end(). Done.\"",
                    "Interviewer wants to see if you can implement the data structure, not just use a library",
                ),
                bad(
                    "Use Array with Linear Search",
                    "Propose O(n) solution without recognizing inefficiency",
                    "[Implements with list.remove() which is O(n)] \"This should work fine.\"",
                    "Misses the core requirement of O(1) operations",
                ),
                bad(
                    "Skip Edge Cases",
                    "Implement happy path only",
                    "[Codes without handling capacity=0, duplicate keys, or empty cache]",
                    "Code will break in production; shows lack of defensive programming",
                ),
            ],
            key_takeaways: lines(&[
                "Always explain WHY you chose specific data structures",
                "Discuss time/space complexity trade-offs explicitly",
                "Edge cases matter more than perfect syntax",
                "Interviewers want to see your problem-solving process, not memorized solutions",
                "If you use AI, understand what it suggests deeply enough to modify it",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q7-candidate-async-programming".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Intermediate,
            title: "Async/Await and Concurrency".to_string(),
            scenario: "Fetch data from multiple APIs in parallel".to_string(),
            context: "You need to call 5 external APIs and combine their results. Each API takes 2 seconds."
                .to_string(),
            ai_prompt: Some(
                "How do I call multiple async functions in parallel in JavaScript?".to_string(),
            ),
            ai_response: Some(
                "Use Promise.all():\n\nconst results = await Promise.all([\n  fetch(url1),\n  fetch(url2),\n  fetch(url3)\n]);"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Recognize Parallelization Opportunity",
                    "Identify that calls can run concurrently",
                    "\"These API calls are independent, so we can parallelize them. Sequential would take 10 seconds, but Promise.all() will take ~2 seconds.\"",
                    "Shows understanding of async programming and performance optimization",
                ),
                good(
                    "Discuss Error Handling",
                    "Address what happens if one API fails",
                    "\"Promise.all() fails fast if any promise rejects. Should we use Promise.allSettled() to handle partial failures? Depends on requirements.\"",
                    "Demonstrates production-ready thinking about failure scenarios",
                ),
                good(
                    "Consider Rate Limiting",
                    "Ask about concurrent request limits",
                    "\"Should we throttle requests? Some APIs have rate limits. We might need Promise.map with concurrency: 3 from a library like Bluebird.\"",
                    "Shows real-world experience with external APIs",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Use Sequential Awaits",
                    "Call APIs one at a time",
                    "await fetch(url1); await fetch(url2); await fetch(url3);  // Takes 6+ seconds",
                    "Major performance issue; shows lack of async/await understanding",
                ),
                bad(
                    "Forget Error Handling",
                    "No try/catch or .catch() handler",
                    "[Uses Promise.all() with no error handling]",
                    "App crashes if any API fails; not production-ready",
                ),
                bad(
                    "Misuse async/await",
                    "Create promises but don't await them properly",
                    "const p1 = fetch(url1); const p2 = fetch(url2); return [p1, p2]; // Returns promises, not values",
                    "Common mistake that leads to [object Promise] instead of actual data",
                ),
            ],
            key_takeaways: lines(&[
                "Promise.all() for parallel execution when all must succeed",
                "Promise.allSettled() when you want results even if some fail",
                "Always discuss error handling and recovery strategies",
                "Recognize opportunities for parallelization to improve performance",
                "Consider rate limiting and backpressure in production scenarios",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q8-interviewer-system-design".to_string(),
            role: Audience::Interviewer,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Advanced,
            title: "Evaluating AI-Assisted System Design".to_string(),
            scenario: "Candidate uses AI to generate system architecture diagram".to_string(),
            context: "You need to assess their system design skills when AI created the initial design."
                .to_string(),
            ai_prompt: None,
            ai_response: None,
            good_approaches: vec![
                good(
                    "Ask About Trade-offs",
                    "Explore alternative approaches and their pros/cons",
                    "\"AI suggested a microservices architecture. Why is that better than a monolith for this use case? What are the downsides?\"",
                    "Tests whether they understand the design or just accepted AI output",
                ),
                good(
                    "Probe Scaling Scenarios",
                    "Ask how design handles 10x or 100x growth",
                    "\"This works for 100K users. What changes when you hit 10M users? Where are the bottlenecks?\"",
                    "Reveals depth of systems thinking",
                ),
                good(
                    "Test Operational Thinking",
                    "Ask about deployment, monitoring, debugging",
                    "\"How would you debug a failure in this system? What metrics would you track? How do you handle rollbacks?\"",
                    "Separates theoretical knowledge from production experience",
                ),
                good(
                    "Challenge the Design",
                    "Point out potential issues to see if they can defend choices",
                    "\"I notice you have a single database. What happens if it goes down? Why didn't AI mention that?\"",
                    "Tests critical thinking and ability to improve on AI suggestions",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Accept Diagram Without Questions",
                    "Don't probe understanding if diagram looks professional",
                    "\"Nice diagram! Looks like you know system design well.\"",
                    "May hire someone who can use AI tools but lacks design judgment",
                ),
                bad(
                    "Focus on Buzzwords",
                    "Judge based on trendy technology mentions",
                    "\"I see you used Kubernetes, Kafka, and GraphQL. Great choices!\"",
                    "Rewards dropping buzzwords without understanding trade-offs",
                ),
                bad(
                    "Don't Test Modifications",
                    "Accept initial design without exploring adaptations",
                    "[Doesn't ask about scaling, failure scenarios, or alternative approaches]",
                    "Misses whether candidate can think dynamically about systems",
                ),
            ],
            key_takeaways: lines(&[
                "System design is about trade-offs, not just generating diagrams",
                "Ask \"why this over that?\" to test understanding",
                "Probe scaling, failure scenarios, and operational concerns",
                "Look for candidates who challenge and improve AI suggestions",
                "Best candidates use AI for validation, not initial design thinking",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q9-candidate-ml-model-design".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Advanced,
            title: "ML Model Selection and Training".to_string(),
            scenario: "Design a fraud detection system for credit card transactions".to_string(),
            context: "You need to build a real-time fraud detection ML model with high precision and recall."
                .to_string(),
            ai_prompt: Some(
                "What ML model should I use for credit card fraud detection?".to_string(),
            ),
            ai_response: Some(
                "Recommended approaches:\n1. Random Forest or XGBoost for tabular data\n2. Neural Networks if you have large dataset\n3. Anomaly detection (Isolation Forest, One-Class SVM)\n4. Ensemble methods for best results\n\nConsider class imbalance - fraud is typically <1% of transactions."
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Discuss Class Imbalance Strategy",
                    "Address the fundamental challenge upfront",
                    "\"Fraud is rare - maybe 0.1% of transactions. We need SMOTE for oversampling, or class weights, or use precision-recall curve instead of ROC-AUC. What's the cost of false positives vs false negatives?\"",
                    "Shows you understand ML fundamentals and business trade-offs",
                ),
                good(
                    "Ask About Latency Requirements",
                    "Connect model choice to system constraints",
                    "\"Real-time means <100ms? That rules out complex ensembles. Maybe a shallow decision tree or linear model first, then complex model async for review?\"",
                    "Demonstrates understanding that ML doesn't exist in isolation",
                ),
                good(
                    "Propose A/B Testing Strategy",
                    "Think about gradual rollout",
                    "\"We should start with 5% traffic, measure false positive rate in production, and compare to rule-based baseline. Need monitoring for model drift.\"",
                    "Shows production ML experience and risk management",
                ),
                good(
                    "Consider Feature Engineering",
                    "Discuss what features matter",
                    "\"Beyond transaction amount and merchant, we need: time since last transaction, location change velocity, merchant category patterns, device fingerprint. Should we use embeddings for categorical features?\"",
                    "Reveals depth of domain knowledge and feature engineering skill",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Just Pick \"Best\" Algorithm",
                    "Choose model without considering constraints",
                    "\"Let's use a deep neural network with 10 layers. That's state of the art.\"",
                    "Ignores latency, interpretability, and may be overkill for the problem",
                ),
                bad(
                    "Ignore Class Imbalance",
                    "Train on imbalanced data without adjustment",
                    "\"We have 1M transactions, 1K fraud cases. Just train the model on all data.\"",
                    "Model will predict \"not fraud\" 99.9% of the time and be useless",
                ),
                bad(
                    "Skip Production Considerations",
                    "Focus only on model accuracy",
                    "\"I got 99% accuracy! Ship it.\"",
                    "99% accuracy means nothing with 0.1% fraud rate - that's worse than predicting \"no fraud\" always",
                ),
                bad(
                    "No Monitoring Plan",
                    "Don't discuss model degradation",
                    "[Never mentions drift detection, retraining, or performance monitoring]",
                    "Model will silently degrade as fraud patterns evolve",
                ),
            ],
            key_takeaways: lines(&[
                "Class imbalance is the #1 challenge in fraud detection",
                "Production ML requires thinking about latency, monitoring, and drift",
                "Accuracy is often the wrong metric - use precision/recall/F1",
                "Always propose A/B testing and gradual rollout",
                "Feature engineering often matters more than algorithm choice",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q10-candidate-distributed-systems".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Advanced,
            title: "Designing Distributed Cache".to_string(),
            scenario: "Design a distributed caching layer for microservices".to_string(),
            context: "Your system has 50 microservices making repeated database queries. You need a shared cache."
                .to_string(),
            ai_prompt: Some("How do I design a distributed cache system?".to_string()),
            ai_response: Some(
                "Key components:\n1. Cache nodes: Redis/Memcached cluster\n2. Consistent hashing for data distribution\n3. Replication for availability\n4. Eviction policy (LRU/LFU)\n5. Cache invalidation strategy"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Discuss CAP Theorem Trade-offs",
                    "Address consistency vs availability",
                    "\"During network partition, do we prefer consistency or availability? If reads can be stale for 1 second, we can use eventual consistency and get better availability.\"",
                    "Shows understanding of distributed systems fundamentals",
                ),
                good(
                    "Propose Cache Warming Strategy",
                    "Handle cold start problem",
                    "\"When a cache node fails and restarts, it's cold. Should we pre-warm popular keys? Or use probabilistic cache aside with fallback to DB?\"",
                    "Demonstrates awareness of operational challenges",
                ),
                good(
                    "Address Thundering Herd",
                    "Prevent cache stampede on expiration",
                    "\"If a popular key expires, 1000 requests hit the DB simultaneously. We need distributed locks or probabilistic early expiration to prevent this.\"",
                    "Shows experience with production caching issues",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Just Say \"Use Redis\"",
                    "Name a tool without architecture",
                    "\"We'll use Redis. Done.\"",
                    "Doesn't address data distribution, replication, invalidation, or failure modes",
                ),
                bad(
                    "Ignore Cache Invalidation",
                    "Don't discuss keeping cache consistent with DB",
                    "[Never mentions how cache gets updated when DB changes]",
                    "Cache will serve stale data indefinitely - one of hardest problems in CS",
                ),
                bad(
                    "No Monitoring Strategy",
                    "Skip metrics and observability",
                    "[Doesn't mention hit rate, latency, memory usage tracking]",
                    "Can't tell if cache is helping or hurting performance",
                ),
            ],
            key_takeaways: lines(&[
                "Cache invalidation is genuinely one of the hardest problems",
                "CAP theorem: you must choose between consistency and availability",
                "Consistent hashing enables horizontal scaling without full rehash",
                "Thundering herd and cold starts are real operational concerns",
                "Always monitor hit rate, latency, and memory usage",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q11-candidate-sql-optimization".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Debugging,
            difficulty: Difficulty::Intermediate,
            title: "Optimizing Slow Database Queries".to_string(),
            scenario: "A dashboard query takes 30 seconds to load".to_string(),
            context: "Users complain that the analytics dashboard is unusable due to slow query performance."
                .to_string(),
            ai_prompt: Some("Why is my PostgreSQL query slow and how do I fix it?".to_string()),
            ai_response: Some(
                "Common causes:\n1. Missing indexes on WHERE/JOIN columns\n2. N+1 query problem\n3. Large dataset without pagination\n4. Expensive JOINs or subqueries\n5. No query optimization (EXPLAIN ANALYZE)"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Start with EXPLAIN ANALYZE",
                    "Get data before optimizing",
                    "\"Let me run EXPLAIN ANALYZE first to see the query plan. Are we doing sequential scans? Which part takes the most time?\"",
                    "Systematic debugging beats guessing; shows you know how to profile",
                ),
                good(
                    "Check for N+1 Queries",
                    "Look at application-level query patterns",
                    "\"Is the application making one query per row? That's N+1. We should use a JOIN or batch the queries.\"",
                    "Shows you understand ORM pitfalls and database interaction patterns",
                ),
                good(
                    "Propose Index Strategy",
                    "But understand index trade-offs",
                    "\"Adding an index on user_id and created_at would help. But indexes slow down writes and use disk space. What's our write/read ratio?\"",
                    "Demonstrates nuanced understanding - indexes aren't free",
                ),
                good(
                    "Consider Materialized Views",
                    "Suggest pre-computing if query is expensive",
                    "\"If this dashboard is queried often but data changes hourly, we could use a materialized view refreshed on schedule.\"",
                    "Shows knowledge of advanced database features",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Add Indexes Blindly",
                    "Index everything without analysis",
                    "\"Let's add indexes on every column in the WHERE clause.\"",
                    "Wastes disk space, slows down writes, may not help if query doesn't use them",
                ),
                bad(
                    "Blame the Database",
                    "Assume database is the bottleneck",
                    "\"PostgreSQL is slow. Let's switch to MongoDB.\"",
                    "Likely a query problem, not a database problem. Major migration for wrong reason",
                ),
                bad(
                    "Cache Without Fixing Query",
                    "Add caching layer to hide bad query",
                    "\"Just cache the results for 1 hour.\"",
                    "Cache is a band-aid; someone will hit the slow query eventually",
                ),
            ],
            key_takeaways: lines(&[
                "Always use EXPLAIN ANALYZE before optimizing",
                "N+1 queries are a common ORM anti-pattern",
                "Indexes have trade-offs: speed up reads, slow down writes",
                "Consider materialized views or summary tables for expensive aggregations",
                "Profile and measure - don't optimize based on assumptions",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q12-both-api-design".to_string(),
            role: Audience::Both,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Intermediate,
            title: "RESTful API Design Best Practices".to_string(),
            scenario: "Design API endpoints for a blog platform".to_string(),
            context: "You're building REST APIs for creating, reading, updating, and deleting blog posts and comments."
                .to_string(),
            ai_prompt: Some("What are REST API best practices for a blog platform?".to_string()),
            ai_response: Some(
                "RESTful design:\n- GET /posts - List all posts\n- GET /posts/:id - Get single post\n- POST /posts - Create post\n- PUT /posts/:id - Update post\n- DELETE /posts/:id - Delete post\n- GET /posts/:id/comments - Get comments for post"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Use Proper HTTP Status Codes",
                    "Return meaningful status codes",
                    "\"200 for success, 201 for created, 404 for not found, 400 for bad input, 401 for unauthorized, 500 for server error. Status codes communicate intent.\"",
                    "Makes API self-documenting and easier to debug",
                ),
                good(
                    "Design for Pagination",
                    "Don't return unlimited results",
                    "\"GET /posts should support ?page=1&limit=20. Return total count in response. Link headers for next/prev pages.\"",
                    "Prevents performance issues as data grows",
                ),
                good(
                    "Version the API",
                    "Plan for breaking changes",
                    "\"Use /api/v1/posts in URL or Accept: application/vnd.api+json;version=1 header. Allows evolving API without breaking clients.\"",
                    "Enables backward compatibility and gradual migration",
                ),
                good(
                    "Include Rate Limiting",
                    "Protect against abuse",
                    "\"Return X-RateLimit-Remaining and X-RateLimit-Reset headers. Return 429 Too Many Requests when exceeded.\"",
                    "Prevents DoS and ensures fair usage",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Use Verbs in URLs",
                    "Non-RESTful naming",
                    "POST /createPost, GET /getAllPosts, POST /deletePost",
                    "Not RESTful; HTTP verbs already express action",
                ),
                bad(
                    "Return 200 for All Responses",
                    "Misuse status codes",
                    "{ \"status\": 200, \"error\": \"Post not found\" } // Returns HTTP 200",
                    "Clients can't use standard HTTP error handling",
                ),
                bad(
                    "No Error Details",
                    "Return generic error messages",
                    "{ \"error\": \"Bad request\" } // No details about what's wrong",
                    "Hard to debug; poor developer experience",
                ),
                bad(
                    "Expose Internal IDs",
                    "Use database auto-increment IDs",
                    "GET /posts/12345 // Leaks information about database size and growth",
                    "Security issue; consider UUIDs or hash IDs instead",
                ),
            ],
            key_takeaways: lines(&[
                "REST uses HTTP verbs (GET, POST, PUT, DELETE) - no verbs in URLs",
                "Status codes communicate success/failure - use them correctly",
                "Always paginate list endpoints to prevent performance issues",
                "Version APIs from day one to allow evolution",
                "Include rate limiting, authentication, and proper error messages",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q13-candidate-react-performance".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Debugging,
            difficulty: Difficulty::Intermediate,
            title: "React Performance Optimization".to_string(),
            scenario: "Large React list re-renders on every keystroke".to_string(),
            context: "You have a searchable table with 1000 rows. Typing in the search box causes the entire table to re-render and feels laggy."
                .to_string(),
            ai_prompt: Some("How do I optimize React performance for a large list?".to_string()),
            ai_response: Some(
                "Optimization strategies:\n1. Use React.memo() to prevent unnecessary re-renders\n2. Use useMemo() for expensive calculations\n3. Use useCallback() to memoize functions\n4. Virtualize long lists with react-window\n5. Debounce search input"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Profile Before Optimizing",
                    "Use React DevTools Profiler",
                    "\"Let me profile this with React DevTools to see what's re-rendering and why. Is it the search component, the list, or both?\"",
                    "Data-driven optimization beats guessing",
                ),
                good(
                    "Identify the Root Cause",
                    "Understand why re-renders happen",
                    "\"Are we passing new object/array references on each render? Is the search state in the wrong component? Let me check the component tree.\"",
                    "Fixes the architecture problem, not just symptoms",
                ),
                good(
                    "Apply Targeted Solutions",
                    "Don't optimize everything",
                    "\"The list items are pure - let's memo them. The search is fine. For 1000 rows, virtualization with react-window makes sense.\"",
                    "Surgical optimization is better than blanket useMemo everywhere",
                ),
                good(
                    "Debounce User Input",
                    "Reduce filter frequency",
                    "\"Instead of filtering on every keystroke, let's debounce by 300ms. That reduces renders from 10/sec to 3/sec.\"",
                    "Often the simplest and most effective solution",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Wrap Everything in useMemo",
                    "Over-optimize without measuring",
                    "[Adds useMemo and useCallback everywhere without profiling]",
                    "Makes code harder to read with minimal benefit; memoization has overhead",
                ),
                bad(
                    "Blame React",
                    "Think React is slow",
                    "\"React is slow with large lists. Let's rewrite in vanilla JS.\"",
                    "React is rarely the bottleneck; usually an architecture or algorithm issue",
                ),
                bad(
                    "Skip Key Prop",
                    "Use index as key or omit keys",
                    "{items.map((item, idx) => <Row key={idx} />)}",
                    "React can't track which items changed; causes unnecessary re-renders and bugs",
                ),
            ],
            key_takeaways: lines(&[
                "Profile first with React DevTools - measure before optimizing",
                "Identify why re-renders happen (state location, prop references)",
                "React.memo for expensive pure components",
                "Debouncing input is often simpler than complex memoization",
                "Virtualization (react-window) for truly long lists (1000+ items)",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q14-interviewer-code-review".to_string(),
            role: Audience::Interviewer,
            category: QuestionCategory::Communication,
            difficulty: Difficulty::Intermediate,
            title: "Reviewing AI-Generated Pull Requests".to_string(),
            scenario: "Candidate submits PR with AI-generated code".to_string(),
            context: "You're reviewing a PR where the candidate admits they used AI to generate most of the code."
                .to_string(),
            ai_prompt: None,
            ai_response: None,
            good_approaches: vec![
                good(
                    "Ask About Design Decisions",
                    "Test understanding of the approach",
                    "\"Walk me through why you chose this architecture. What alternatives did you consider?\"",
                    "Reveals whether they understand the code or just copied it",
                ),
                good(
                    "Request Modification",
                    "Ask them to extend or modify the code",
                    "\"Can you add error handling for network timeouts? What would you change if this needed to support 10x traffic?\"",
                    "Tests if they can work with and modify AI-generated code",
                ),
                good(
                    "Probe Edge Cases",
                    "Ask about scenarios AI might have missed",
                    "\"What happens if two users update the same record simultaneously? Did you test with empty input?\"",
                    "Shows whether they reviewed the code critically",
                ),
                good(
                    "Check for Security Issues",
                    "AI often generates insecure code",
                    "\"I see you're concatenating user input into SQL. Is this vulnerable to injection? What about input validation?\"",
                    "Tests security awareness and code review skills",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Reject AI Usage Outright",
                    "Policy against AI is unrealistic",
                    "\"We don't allow AI-generated code here. Rewrite this without AI.\"",
                    "Disconnected from reality - 82% of devs use AI tools",
                ),
                bad(
                    "Accept Without Questions",
                    "Don't verify understanding",
                    "\"Looks good, tests pass. Approved.\"",
                    "May merge code the author doesn't understand or that has subtle bugs",
                ),
                bad(
                    "Only Check Style",
                    "Focus on formatting instead of logic",
                    "\"Please fix the indentation and add semicolons.\"",
                    "Misses logic errors, security issues, and architecture problems",
                ),
            ],
            key_takeaways: lines(&[
                "AI code requires more careful review, not less",
                "Test understanding by asking for modifications or explanations",
                "Check for security issues - AI often generates vulnerable code",
                "Probe edge cases and error handling",
                "Accepting AI use while ensuring code quality is the right balance",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q15-backend-api-auth".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Advanced,
            title: "Backend: Implementing JWT Authentication".to_string(),
            scenario: "Build secure JWT-based authentication for a REST API".to_string(),
            context: "Your API needs stateless authentication with access and refresh tokens."
                .to_string(),
            ai_prompt: Some(
                "How do I implement JWT authentication with refresh tokens in Node.js?".to_string(),
            ),
            ai_response: Some(
                "const jwt = require('jsonwebtoken');\n\nfunction generateTokens(userId) {\n  const accessToken = jwt.sign({ userId }, 'secret', { expiresIn: '15m' });\n  const refreshToken = jwt.sign({ userId }, 'secret', { expiresIn: '7d' });\n  return { accessToken, refreshToken };\n}"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Identify Security Issues Immediately",
                    "Spot the hardcoded secret and lack of token storage",
                    "\"This AI code has critical issues: hardcoded secret should be in env vars, refresh tokens need to be stored in database to enable revocation, and we should use different secrets for access vs refresh tokens.\"",
                    "Shows security awareness and production-ready thinking",
                ),
                good(
                    "Discuss Token Rotation",
                    "Propose refresh token rotation strategy",
                    "\"When refresh token is used, we should issue a new refresh token and invalidate the old one. This limits the window for token theft.\"",
                    "Demonstrates understanding of advanced auth patterns",
                ),
                good(
                    "Consider Token Storage",
                    "Discuss where tokens should be stored client-side",
                    "\"Access token in memory, refresh token in httpOnly secure cookie. LocalStorage is vulnerable to XSS attacks.\"",
                    "Shows web security knowledge beyond just backend",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Accept Hardcoded Secret",
                    "Use AI code with hardcoded credentials",
                    "[Uses jwt.sign with hardcoded \"secret\" string in production]",
                    "Major security vulnerability; anyone can forge tokens",
                ),
                bad(
                    "No Refresh Token Storage",
                    "Don't store refresh tokens for revocation",
                    "\"Refresh tokens are stateless, we don't need to store them.\"",
                    "Can't revoke tokens if account is compromised",
                ),
                bad(
                    "Skip Token Expiry Validation",
                    "Don't verify token expiry in middleware",
                    "[Verifies signature but not exp claim]",
                    "Expired tokens still work; security issue",
                ),
            ],
            key_takeaways: lines(&[
                "Never hardcode secrets - use environment variables",
                "Refresh tokens must be stored for revocation capability",
                "Use different secrets for access and refresh tokens",
                "Token storage matters: httpOnly cookies > localStorage",
                "Always validate both signature AND expiry claims",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q16-backend-database-transactions".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Advanced,
            title: "Backend: Database Transactions and Race Conditions".to_string(),
            scenario: "Handle concurrent money transfers without double-spending".to_string(),
            context: "Your banking API needs to prevent race conditions during simultaneous transfers from the same account."
                .to_string(),
            ai_prompt: Some(
                "How do I prevent race conditions in database transactions for money transfers?"
                    .to_string(),
            ),
            ai_response: Some(
                "async function transferMoney(fromAccount, toAccount, amount) {\n  const session = await db.startSession();\n  session.startTransaction();\n  try {\n    await Account.findByIdAndUpdate(fromAccount, { $inc: { balance: -amount }});\n    await Account.findByIdAndUpdate(toAccount, { $inc: { balance: amount }});\n    await session.commitTransaction();\n  } catch (error) {\n    await session.abortTransaction();\n    throw error;\n  }\n}"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Identify Missing Balance Check",
                    "Spot that AI code doesn't validate sufficient funds",
                    "\"This code is missing a critical check: what if fromAccount has $100 but we're transferring $500? We need to read the balance, check if amount <= balance, THEN update. All within the transaction.\"",
                    "Prevents overdrafts and negative balances",
                ),
                good(
                    "Discuss Isolation Levels",
                    "Understand transaction isolation",
                    "\"We need READ COMMITTED or SERIALIZABLE isolation to prevent dirty reads. MongoDB uses snapshot isolation by default, but we should explicitly set it.\"",
                    "Shows deep understanding of database concurrency",
                ),
                good(
                    "Propose Optimistic Locking",
                    "Suggest version field to detect concurrent updates",
                    "\"We could add a version field and use findOneAndUpdate with version in the query. If version doesn't match, transaction fails and we retry.\"",
                    "Demonstrates knowledge of concurrency control patterns",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Trust AI Code Completely",
                    "Accept transaction code without testing race conditions",
                    "\"AI used transactions, so it should be safe from race conditions.\"",
                    "Missing balance validation means account can go negative",
                ),
                bad(
                    "Use Sleep/Delays",
                    "Try to \"fix\" race conditions with setTimeout",
                    "\"Let's add a small delay between read and write to avoid conflicts.\"",
                    "Doesn't solve the problem; just makes race window smaller",
                ),
                bad(
                    "No Retry Logic",
                    "Don't handle transaction conflicts",
                    "[Transaction fails on conflict, returns error to user instead of retrying]",
                    "Poor user experience; many legitimate requests will fail",
                ),
            ],
            key_takeaways: lines(&[
                "Transactions alone don't prevent all race conditions",
                "Always validate business rules (like sufficient balance) within transaction",
                "Understand isolation levels: READ COMMITTED, REPEATABLE READ, SERIALIZABLE",
                "Optimistic locking (version fields) is often better than pessimistic locks",
                "Test race conditions explicitly with concurrent requests",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q17-frontend-state-management".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Intermediate,
            title: "Frontend: React State Management Patterns".to_string(),
            scenario: "Manage complex form state with validation".to_string(),
            context: "Multi-step checkout form with validation, API calls, and error handling."
                .to_string(),
            ai_prompt: Some(
                "How should I manage state for a complex multi-step form in React?".to_string(),
            ),
            ai_response: Some(
                "Options:\n1. useState for simple local state\n2. useReducer for complex state logic\n3. Context API for sharing state\n4. Redux/Zustand for global state\n5. React Hook Form for form-specific state"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Start with Requirements",
                    "Ask clarifying questions about the form",
                    "\"Before choosing a solution, let me understand: Do other components need this state? Is there complex validation logic? Do we need to persist form data? How many steps?\"",
                    "Shows you don't cargo-cult solutions without understanding needs",
                ),
                good(
                    "Propose Progressive Enhancement",
                    "Start simple, add complexity as needed",
                    "\"Let's start with useState for each step. If we need cross-step validation, upgrade to useReducer. If other components need it, add Context. We can always refactor.\"",
                    "Practical approach; avoids over-engineering",
                ),
                good(
                    "Consider Form Libraries",
                    "Evaluate React Hook Form or Formik",
                    "\"For complex validation, React Hook Form handles field-level validation, touched state, and errors out of the box. Less code to maintain than rolling our own.\"",
                    "Shows awareness of ecosystem and when to use libraries",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Jump to Redux Immediately",
                    "Over-engineer with global state",
                    "\"Let's use Redux for this form.\"",
                    "Massive overkill; Redux adds complexity that's not needed for local form state",
                ),
                bad(
                    "Use Props for Everything",
                    "Prop drill through multiple components",
                    "[Passes formData, setFormData, errors, setErrors through 5 levels of components]",
                    "Props drilling hell; hard to maintain and refactor",
                ),
                bad(
                    "Store Everything in URL",
                    "Use query params for complex state",
                    "\"Let's put all form data in URL query parameters.\"",
                    "URL becomes huge, sensitive data exposed in URL, poor UX",
                ),
            ],
            key_takeaways: lines(&[
                "Choose state solution based on actual requirements, not trends",
                "Start simple (useState) and refactor when needed",
                "Consider form libraries for complex validation (React Hook Form, Formik)",
                "Context is for shared state, not all state",
                "Redux/Zustand are for global app state, not local component state",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q18-frontend-accessibility".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Intermediate,
            title: "Frontend: Web Accessibility (A11y)".to_string(),
            scenario: "Make a custom dropdown component accessible".to_string(),
            context: "You built a custom dropdown menu, but it fails accessibility audit."
                .to_string(),
            ai_prompt: Some("How do I make a custom dropdown accessible?".to_string()),
            ai_response: Some(
                "Add ARIA attributes:\n- role=\"listbox\" on container\n- role=\"option\" on items\n- aria-expanded on trigger\n- aria-selected on selected item\n- Handle keyboard navigation (Arrow keys, Enter, Esc)"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Explain Why Accessibility Matters",
                    "Discuss beyond compliance",
                    "\"20% of users have disabilities. Screen readers, keyboard-only users, low vision - we need to serve them all. Plus, good a11y improves UX for everyone.\"",
                    "Shows you care about inclusive design, not just checking boxes",
                ),
                good(
                    "Test with Actual Tools",
                    "Use screen reader and keyboard",
                    "\"Let me test with VoiceOver/NVDA and keyboard only. Does it announce correctly? Can I navigate with Tab and Arrow keys? Is focus visible?\"",
                    "Demonstrates practical a11y testing, not just theory",
                ),
                good(
                    "Consider Using Existing Solutions",
                    "Mention Headless UI or Radix",
                    "\"Libraries like Radix UI or Headless UI have accessible dropdowns built-in. Should we use those instead of custom implementation?\"",
                    "Shows pragmatism; accessibility is hard to get right from scratch",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Just Add ARIA Without Testing",
                    "Slap on ARIA attributes blindly",
                    "[Adds role=\"listbox\" and aria-expanded without keyboard navigation]",
                    "ARIA without proper implementation makes things worse for screen readers",
                ),
                bad(
                    "Skip Keyboard Navigation",
                    "Mouse-only interaction",
                    "\"Keyboard users can just use Tab to get to the dropdown items.\"",
                    "Completely unusable for keyboard-only users",
                ),
                bad(
                    "Treat A11y as Afterthought",
                    "Don't think about it until audit fails",
                    "\"We'll add accessibility later if we have time.\"",
                    "Much harder to retrofit; often never gets done",
                ),
            ],
            key_takeaways: lines(&[
                "Accessibility is not optional - 20% of users need it",
                "ARIA without proper implementation makes things worse",
                "Always test with screen reader and keyboard navigation",
                "Consider using battle-tested libraries (Radix UI, Headless UI)",
                "Build accessibility in from the start, not as afterthought",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q19-data-etl-pipeline".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Advanced,
            title: "Data: Designing ETL Pipeline".to_string(),
            scenario: "Process 10TB of logs daily for analytics".to_string(),
            context: "You need to extract, transform, and load data from application logs into a data warehouse."
                .to_string(),
            ai_prompt: Some(
                "How do I design a scalable ETL pipeline for processing large log files?"
                    .to_string(),
            ),
            ai_response: Some(
                "Architecture:\n1. Ingestion: Kafka or S3 for raw logs\n2. Processing: Apache Spark or AWS Glue\n3. Transformation: Clean, dedupe, aggregate\n4. Storage: Data warehouse (Snowflake, BigQuery, Redshift)\n5. Orchestration: Airflow or Prefect"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Discuss Batch vs Streaming",
                    "Understand latency requirements",
                    "\"Do we need real-time analytics or is hourly okay? Batch (Spark) is simpler and cheaper. Streaming (Flink, Spark Streaming) is complex but gives real-time insights.\"",
                    "Shows you optimize for requirements, not resume-driven development",
                ),
                good(
                    "Address Data Quality",
                    "Plan for schema validation and bad data",
                    "\"We need schema validation at ingestion. What happens with malformed logs? Dead letter queue for bad records. Data quality checks before loading to warehouse.\"",
                    "Demonstrates experience with real data pipelines",
                ),
                good(
                    "Propose Idempotency Strategy",
                    "Handle reprocessing and failures",
                    "\"Partitions by date/hour. If processing fails, we can rerun without duplicates. Use UPSERT or deduplication keys.\"",
                    "Shows understanding of distributed system failure modes",
                ),
                good(
                    "Consider Cost Optimization",
                    "Discuss data lifecycle and compression",
                    "\"Recent data in hot storage, older data in cold storage (S3 Glacier). Use Parquet format for 10x compression. Partition by date for query performance.\"",
                    "Thinks about operational costs and efficiency",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Just Name Technologies",
                    "List buzzwords without architecture",
                    "\"We'll use Kafka, Spark, and Snowflake.\"",
                    "Doesn't explain data flow, error handling, or scaling strategy",
                ),
                bad(
                    "Ignore Failure Scenarios",
                    "Design only happy path",
                    "[Never discusses what happens when Spark job fails or data is corrupted]",
                    "Pipeline will have frequent outages and data quality issues",
                ),
                bad(
                    "No Monitoring Plan",
                    "Skip observability",
                    "[Doesn't mention metrics, alerts, or data quality dashboards]",
                    "Can't detect when pipeline is broken or producing bad data",
                ),
            ],
            key_takeaways: lines(&[
                "Batch vs streaming depends on latency requirements and complexity",
                "Data quality validation is critical - plan for bad data",
                "Idempotency allows safe reprocessing on failures",
                "Partition data by time for query performance and lifecycle management",
                "Monitor data freshness, volume, and quality metrics",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q20-data-sql-window-functions".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Advanced,
            title: "Data: SQL Window Functions for Analytics".to_string(),
            scenario: "Calculate running totals and moving averages".to_string(),
            context: "Analytics query needs to show daily revenue, 7-day moving average, and cumulative total."
                .to_string(),
            ai_prompt: Some(
                "How do I write SQL with running totals and moving averages?".to_string(),
            ),
            ai_response: Some(
                "SELECT\n  date,\n  revenue,\n  SUM(revenue) OVER (ORDER BY date) as cumulative_total,\n  AVG(revenue) OVER (ORDER BY date ROWS BETWEEN 6 PRECEDING AND CURRENT ROW) as moving_avg_7day\nFROM daily_revenue\nORDER BY date;"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Explain Window Functions",
                    "Articulate how OVER clause works",
                    "\"OVER creates a window of rows. ORDER BY date means cumulative. ROWS BETWEEN 6 PRECEDING AND CURRENT ROW gives us 7 days total for moving average.\"",
                    "Shows deep SQL knowledge beyond basic queries",
                ),
                good(
                    "Handle Edge Cases",
                    "Discuss first 6 days of moving average",
                    "\"First 6 days won't have full 7-day window. Should we use RANGE instead of ROWS? Or filter WHERE date > DATE_SUB(MIN(date), INTERVAL 6 DAY)?\"",
                    "Demonstrates attention to data correctness",
                ),
                good(
                    "Consider Performance",
                    "Discuss indexes and materialized views",
                    "\"Window functions can be slow on large tables. Index on date column helps. If this query runs often, consider materialized view refreshed daily.\"",
                    "Thinks about production performance",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Use Self-Join Instead",
                    "Implement with correlated subquery",
                    "[Uses SELECT SUM(revenue) FROM daily_revenue dr2 WHERE dr2.date <= dr1.date for each row]",
                    "O(n²) query; window functions are O(n) - performance disaster",
                ),
                bad(
                    "Calculate in Application Code",
                    "Fetch all data and compute in backend",
                    "\"Let's pull all rows into Python and calculate running total in a loop.\"",
                    "Transfers huge datasets; should leverage database for computation",
                ),
                bad(
                    "Ignore NULL Values",
                    "Don't handle missing data",
                    "[Doesn't consider what happens if revenue is NULL for some days]",
                    "Moving average calculation breaks or gives incorrect results",
                ),
            ],
            key_takeaways: lines(&[
                "Window functions (OVER) are powerful for analytics queries",
                "Use ROWS for physical row counts, RANGE for logical ranges",
                "Window functions are more efficient than self-joins for running calculations",
                "Handle edge cases like incomplete windows and NULL values",
                "Index on ORDER BY columns for better performance",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q21-ml-model-training".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Advanced,
            title: "ML: Training Pipeline and Model Deployment".to_string(),
            scenario: "Build production ML training pipeline".to_string(),
            context: "Your ML model needs retraining weekly as new data arrives. Current manual process takes 2 days."
                .to_string(),
            ai_prompt: Some("How do I build an automated ML training pipeline?".to_string()),
            ai_response: Some(
                "Components:\n1. Data ingestion: Pull new training data from warehouse\n2. Feature engineering: Transform raw data\n3. Model training: Train multiple models, pick best\n4. Validation: Test on holdout set\n5. Deployment: Replace production model if better\n6. Monitoring: Track model performance"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Discuss Data Versioning",
                    "Track what data was used for each model",
                    "\"We need DVC or similar to version datasets. If model performs poorly, we should be able to reproduce training with exact same data. Also helps with debugging.\"",
                    "Shows understanding of ML ops best practices",
                ),
                good(
                    "Propose A/B Testing Framework",
                    "Safely deploy new models",
                    "\"Don't replace prod model automatically. Deploy to 5% traffic, compare metrics to current model, gradually ramp up if better. Need feature flags for rollback.\"",
                    "Demonstrates production ML deployment experience",
                ),
                good(
                    "Address Model Drift Monitoring",
                    "Detect when model degrades",
                    "\"Track input distribution drift and output metrics. If accuracy drops 5% or input features shift significantly, trigger alert. May need retraining with different features.\"",
                    "Understands ML models degrade over time",
                ),
                good(
                    "Plan for Experiment Tracking",
                    "Use MLflow or Weights & Biases",
                    "\"Log hyperparameters, metrics, and artifacts for every training run. Makes it easy to compare experiments and reproduce results.\"",
                    "Shows knowledge of ML development tools",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Auto-Deploy Without Validation",
                    "Replace prod model automatically",
                    "\"Train new model weekly and deploy to production automatically.\"",
                    "If model is worse, it silently degrades prod without anyone noticing",
                ),
                bad(
                    "No Reproducibility",
                    "Don't track data or hyperparameters",
                    "[Trains model but doesn't log what data, params, or code version was used]",
                    "Can't reproduce results or debug performance regressions",
                ),
                bad(
                    "Skip Monitoring",
                    "No model performance tracking",
                    "\"Model is deployed, we're done.\"",
                    "Model silently degrades as data distribution shifts",
                ),
            ],
            key_takeaways: lines(&[
                "Version data, code, and models for reproducibility",
                "Never auto-deploy without A/B testing and validation",
                "Monitor for model drift and input distribution changes",
                "Use experiment tracking tools (MLflow, W&B)",
                "Plan for rollback and gradual deployment strategies",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q22-ml-feature-engineering".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Advanced,
            title: "ML: Feature Engineering Best Practices".to_string(),
            scenario: "Predict customer churn for subscription service".to_string(),
            context: "You have raw event data: logins, payments, support tickets. Need to create features for churn prediction."
                .to_string(),
            ai_prompt: Some(
                "What features should I engineer for customer churn prediction?".to_string(),
            ),
            ai_response: Some(
                "Key features:\n1. Recency: Days since last login\n2. Frequency: Logins per week\n3. Monetary: Payment history, amount\n4. Engagement: Feature usage counts\n5. Support: Number of tickets\n6. Tenure: How long they've been a customer"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Identify Feature Leakage",
                    "Spot features that use future information",
                    "\"If we include 'canceled_subscription' as a feature, that's leakage - we wouldn't know this at prediction time. Features must use only past data.\"",
                    "Critical ML concept; prevents overfitted useless models",
                ),
                good(
                    "Propose Interaction Features",
                    "Go beyond basic features",
                    "\"Beyond individual features, let's try: engagement_drop (compare last 7 days to previous 30 days), payment_irregularity (variance in payment dates), support_ticket_spike.\"",
                    "Shows creative feature engineering thinking",
                ),
                good(
                    "Discuss Feature Scaling",
                    "Address different scales and distributions",
                    "\"Tenure is 1-365 days, login_count is 0-1000. We need to normalize or use tree-based models that don't require scaling. What model are we using?\"",
                    "Understands how feature engineering depends on model choice",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Use Raw Event Counts",
                    "No aggregation or time windows",
                    "\"Let's use login_count, payment_count as features.\"",
                    "Absolute counts without time context are less useful than rates/trends",
                ),
                bad(
                    "Include Target Leakage",
                    "Use information from the future",
                    "[Includes features like \"complaints_after_cancellation\" in training data]",
                    "Model performs great in training, completely fails in production",
                ),
                bad(
                    "Ignore Missing Data",
                    "Don't handle NULLs appropriately",
                    "[Drops all rows with any NULL value, or fills with 0 without thinking]",
                    "Loses data or creates misleading patterns",
                ),
            ],
            key_takeaways: lines(&[
                "Feature leakage is silent killer - only use past information",
                "Rates and trends often better than absolute counts",
                "Interaction features can capture complex patterns",
                "Feature scaling matters for some models, not others",
                "Handle missing data thoughtfully - imputation strategy matters",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q23-mobile-offline-sync".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Advanced,
            title: "Mobile: Offline-First Architecture".to_string(),
            scenario: "Design mobile app that works offline".to_string(),
            context: "Note-taking app needs to work without internet and sync when connection returns."
                .to_string(),
            ai_prompt: Some(
                "How do I implement offline-first architecture in a mobile app?".to_string(),
            ),
            ai_response: Some(
                "Strategy:\n1. Local database: SQLite or Realm\n2. Optimistic UI updates\n3. Background sync queue\n4. Conflict resolution (last-write-wins or CRDT)\n5. Network status detection"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Discuss Conflict Resolution",
                    "Address what happens when same note edited offline on two devices",
                    "\"If user edits note on phone and laptop while offline, which version wins when they sync? Last-write-wins is simple but loses data. CRDTs preserve all edits but are complex. Depends on use case.\"",
                    "Shows understanding of distributed systems challenges",
                ),
                good(
                    "Propose Optimistic UI",
                    "Explain user experience during sync",
                    "\"User sees changes immediately even offline. We show sync status indicator. If sync fails, show retry option or conflict resolution UI.\"",
                    "Thinks about user experience, not just technical implementation",
                ),
                good(
                    "Address Storage Limits",
                    "Mobile devices have limited storage",
                    "\"Can't store all data locally. Sync recent notes, cache frequently accessed ones. Provide UI to manually download older notes.\"",
                    "Understands mobile platform constraints",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Just Queue Operations",
                    "Simple retry queue without conflict handling",
                    "\"Store failed requests in queue, retry when online.\"",
                    "Doesn't address conflicts; data can be overwritten unexpectedly",
                ),
                bad(
                    "Assume Network is Always Available",
                    "Show errors when offline",
                    "\"Check if online before each operation. If offline, show error: 'No internet connection'\"",
                    "Poor UX; app becomes unusable offline despite being installed locally",
                ),
                bad(
                    "No User Feedback",
                    "Silent background sync without status",
                    "[Syncs in background but user has no idea if changes are saved to cloud]",
                    "User anxiety; unclear if work is safe or will be lost",
                ),
            ],
            key_takeaways: lines(&[
                "Offline-first means app works without network, not just retries",
                "Conflict resolution is hard - choose strategy based on use case",
                "Optimistic UI improves perceived performance",
                "Mobile storage is limited - can't sync everything",
                "Always provide clear sync status feedback to users",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q24-mobile-performance".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Debugging,
            difficulty: Difficulty::Intermediate,
            title: "Mobile: React Native Performance Optimization".to_string(),
            scenario: "FlatList scrolling is janky with 1000 items".to_string(),
            context: "Your React Native app has a feed that lags during scrolling.".to_string(),
            ai_prompt: Some("How do I optimize React Native FlatList performance?".to_string()),
            ai_response: Some(
                "Optimization techniques:\n1. Use getItemLayout for fixed heights\n2. Set windowSize and initialNumToRender\n3. Use React.memo on list items\n4. Avoid anonymous functions in renderItem\n5. Use keyExtractor properly"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Profile First",
                    "Use React Native performance monitor",
                    "\"Let me check the performance monitor. Is it JS thread or UI thread that's slow? Are we dropping frames during scroll?\"",
                    "Data-driven debugging; identifies actual bottleneck",
                ),
                good(
                    "Identify Expensive Renders",
                    "Check if items re-render unnecessarily",
                    "\"Are list items re-rendering on scroll? Let me add console.log in render. If yes, we need React.memo and fix prop references.\"",
                    "Fixes root cause rather than applying random optimizations",
                ),
                good(
                    "Discuss getItemLayout Benefits",
                    "Explain why fixed heights help",
                    "\"If items have fixed height, getItemLayout lets FlatList calculate positions without rendering. Massive perf improvement for long lists.\"",
                    "Shows understanding of virtualization internals",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Apply All Optimizations Blindly",
                    "Add every optimization without measuring",
                    "[Adds memo, getItemLayout, reduces windowSize, all at once without profiling]",
                    "Can't tell which optimization helped; might make things worse",
                ),
                bad(
                    "Blame React Native",
                    "Think framework is the problem",
                    "\"React Native is slow. Let's rewrite in native iOS/Android.\"",
                    "Usually a code problem, not framework problem; huge wasted effort",
                ),
                bad(
                    "Use ScrollView Instead",
                    "Switch to non-virtualized list",
                    "\"FlatList is slow, let's use ScrollView.\"",
                    "ScrollView renders ALL items; will be even slower and crash with 1000 items",
                ),
            ],
            key_takeaways: lines(&[
                "Profile first with React Native performance tools",
                "getItemLayout is huge win for fixed-height items",
                "Avoid creating new functions/objects in render",
                "React.memo prevents unnecessary re-renders",
                "FlatList virtualizes; ScrollView doesn't - use FlatList for long lists",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q25-backend-microservices".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::SystemDesign,
            difficulty: Difficulty::Advanced,
            title: "Backend: Microservices Communication Patterns".to_string(),
            scenario: "Design service communication for order processing".to_string(),
            context: "Order service needs to coordinate with inventory, payment, and shipping services."
                .to_string(),
            ai_prompt: Some(
                "Should I use synchronous REST calls or async message queue for microservices?"
                    .to_string(),
            ),
            ai_response: Some(
                "Options:\n1. Synchronous (REST/gRPC): Simple, immediate response, but tight coupling\n2. Asynchronous (Kafka/RabbitMQ): Loose coupling, better fault tolerance, eventual consistency\n3. Hybrid: Critical path synchronous, background tasks async"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Analyze Use Case Requirements",
                    "Choose based on consistency needs",
                    "\"Order placement needs immediate inventory check - use sync REST. Payment processing can be async with callback. Shipping notification definitely async. Each interaction has different requirements.\"",
                    "Shows nuanced thinking; not one-size-fits-all",
                ),
                good(
                    "Discuss Failure Scenarios",
                    "Address partial failures",
                    "\"What if payment succeeds but shipping service is down? We need saga pattern or compensating transactions to roll back. Or make operations idempotent and retry.\"",
                    "Demonstrates distributed systems experience",
                ),
                good(
                    "Consider Latency Budget",
                    "Calculate end-to-end latency",
                    "\"If we chain 5 sync calls at 100ms each, that's 500ms minimum. User expects <1 second. We need async for non-critical steps or parallel execution.\"",
                    "Thinks about user experience and performance",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Everything Synchronous",
                    "Chain all service calls sequentially",
                    "\"Order service calls inventory (200ms), then payment (300ms), then shipping (150ms). Total 650ms.\"",
                    "Slow, brittle; if any service down, whole flow fails",
                ),
                bad(
                    "Everything Asynchronous",
                    "Make even critical path async",
                    "\"All services communicate via Kafka. User gets 'Order submitted' immediately.\"",
                    "Can't tell user if order actually succeeded; bad UX for critical operations",
                ),
                bad(
                    "No Retry Logic",
                    "Fail immediately on service unavailability",
                    "[Service call fails, returns 500 to user without retry or circuit breaker]",
                    "Poor reliability; transient failures cause user-facing errors",
                ),
            ],
            key_takeaways: lines(&[
                "Sync vs async depends on requirements - no universal answer",
                "Critical path (order validation) often needs sync for immediate feedback",
                "Background tasks (notifications, analytics) should be async",
                "Plan for partial failures with sagas or compensating transactions",
                "Use circuit breakers and retries for resilience",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q26-frontend-webpack-optimization".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Debugging,
            difficulty: Difficulty::Advanced,
            title: "Frontend: Bundle Size and Performance".to_string(),
            scenario: "Production bundle is 5MB and takes 10 seconds to load".to_string(),
            context: "Your React app has a huge initial bundle affecting user experience."
                .to_string(),
            ai_prompt: Some("How do I reduce webpack bundle size?".to_string()),
            ai_response: Some(
                "Strategies:\n1. Code splitting with React.lazy()\n2. Tree shaking - remove unused code\n3. Analyze bundle with webpack-bundle-analyzer\n4. Lazy load heavy libraries\n5. Use production builds (minification)"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Analyze Before Optimizing",
                    "Use bundle analyzer to find culprits",
                    "\"Let me run webpack-bundle-analyzer first. Is it a huge library (lodash, moment)? Unused code? Or just lots of features? Can't optimize what we don't measure.\"",
                    "Identifies actual problems instead of guessing",
                ),
                good(
                    "Propose Route-Based Splitting",
                    "Split by page/route",
                    "\"Admin panel code shouldn't load for regular users. Use React.lazy() for route components. Each route becomes separate chunk loaded on demand.\"",
                    "Reduces initial bundle significantly with minimal code changes",
                ),
                good(
                    "Replace Heavy Dependencies",
                    "Identify bloated libraries",
                    "\"We're using all of lodash for 3 functions. Import specific functions or use native JS. Moment.js is 67KB; date-fns is 2KB for same features.\"",
                    "Big wins by replacing heavy deps with lighter alternatives",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Optimize Random Things",
                    "Minify images or remove comments without analysis",
                    "\"Let's compress all images and remove console.logs. That should help.\"",
                    "Wastes time on minor optimizations while ignoring 4MB of unused libraries",
                ),
                bad(
                    "Code Split Everything",
                    "Lazy load even tiny components",
                    "[React.lazy() on 100 small components, creating 100 network requests]",
                    "Too many small chunks; network overhead becomes worse than large bundle",
                ),
                bad(
                    "Skip Source Maps",
                    "Remove source maps to reduce size",
                    "\"Source maps are 2MB, let's not generate them in production.\"",
                    "Can't debug production errors; source maps shouldn't be shipped to users anyway",
                ),
            ],
            key_takeaways: lines(&[
                "Always analyze bundle with webpack-bundle-analyzer first",
                "Route-based code splitting provides biggest wins",
                "Replace heavy dependencies (moment → date-fns, lodash → native)",
                "Tree shaking only works with ES6 imports",
                "Balance: too many small chunks vs one huge bundle",
            ]),
            resources: Vec::new(),
        },
        PlaygroundQuestion {
            id: "q27-data-pipeline-testing".to_string(),
            role: Audience::Candidate,
            category: QuestionCategory::Debugging,
            difficulty: Difficulty::Intermediate,
            title: "Data: Testing ETL Pipelines".to_string(),
            scenario: "Data pipeline produces incorrect aggregations".to_string(),
            context: "Your Spark job calculates daily active users, but numbers don't match manual queries."
                .to_string(),
            ai_prompt: Some("How do I test and debug data pipelines?".to_string()),
            ai_response: Some(
                "Testing approaches:\n1. Unit tests for transformation functions\n2. Integration tests with sample data\n3. Data quality checks (row counts, nulls, ranges)\n4. Compare output to known-good baseline\n5. Schema validation"
                    .to_string(),
            ),
            good_approaches: vec![
                good(
                    "Start with Data Validation",
                    "Check input data quality first",
                    "\"Before debugging the pipeline, let's validate input data. Are there duplicates? NULL user_ids? Dates outside expected range? Bad input = bad output.\"",
                    "Identifies data quality issues which are often root cause",
                ),
                good(
                    "Use Diff Testing",
                    "Compare with known-good subset",
                    "\"Let me manually calculate DAU for one day, then compare with pipeline output. If they differ, I can debug that specific case.\"",
                    "Creates reproducible test case for debugging",
                ),
                good(
                    "Check for Logic Errors",
                    "Verify distinct user counting",
                    "\"Are we counting unique users or total events? If user has 10 sessions, are we counting them 10 times? Need DISTINCT or GROUP BY properly.\"",
                    "Catches common aggregation mistakes",
                ),
            ],
            bad_approaches: vec![
                bad(
                    "Blame the Framework",
                    "Think Spark has a bug",
                    "\"Spark must be calculating wrong. Let's try a different framework.\"",
                    "Almost always a logic error in YOUR code, not Spark",
                ),
                bad(
                    "Add Random Filters",
                    "Try fixing by adding WHERE clauses",
                    "[Adds random filters without understanding why numbers are wrong]",
                    "Changes output but doesn't fix underlying bug",
                ),
                bad(
                    "No Assertions or Tests",
                    "Deploy without validation",
                    "[Runs pipeline, ships results without comparing to expected values]",
                    "Downstream consumers use incorrect data for decisions",
                ),
            ],
            key_takeaways: lines(&[
                "Validate input data quality before debugging pipeline logic",
                "Create known-good test cases for comparison",
                "Common errors: missing DISTINCT, wrong time zone, duplicates",
                "Add data quality assertions in pipeline code",
                "Test with realistic data volume, not just small samples",
            ]),
            resources: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_library_has_unique_ids_and_both_sides_of_each_question() {
        let library = QuestionLibrary::standard();
        let mut seen = HashSet::new();
        for question in library.questions() {
            assert!(seen.insert(question.id.as_str()), "duplicate {}", question.id);
            assert!(!question.good_approaches.is_empty());
            assert!(!question.bad_approaches.is_empty());
            assert!(!question.key_takeaways.is_empty());
            assert!(question
                .good_approaches
                .iter()
                .all(|example| example.kind == ApproachKind::Good));
            assert!(question
                .bad_approaches
                .iter()
                .all(|example| example.kind == ApproachKind::Bad));
        }
    }

    #[test]
    fn every_category_and_role_is_represented() {
        let library = QuestionLibrary::standard();
        assert_eq!(library.questions().len(), 27);

        let per_category: Vec<usize> = QuestionCategory::ordered()
            .into_iter()
            .map(|category| library.for_category(category).len())
            .collect();
        assert_eq!(per_category, vec![10, 8, 6, 2, 1]);

        for role in Audience::ordered() {
            assert!(library.questions().iter().any(|q| q.role == role));
        }
        assert_eq!(
            library.find("q5-candidate-ethics").map(|q| q.resources.len()),
            Some(2)
        );
    }
}
